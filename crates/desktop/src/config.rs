//! Resolved file locations.
//!
//! Flags and environment variables are merged by clap (flag wins over
//! variable, variable over default); this type only joins the results.

use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.csv";
pub const PRODUCT_FILE: &str = "product_data.csv";
pub const MATERIAL_FILE: &str = "mat_data.csv";
pub const SALES_FILE: &str = "sales_data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub inventory_file: PathBuf,
}

impl AppConfig {
    /// `inventory_file` is taken relative to `data_dir` unless it is absolute.
    pub fn new(data_dir: impl Into<PathBuf>, inventory_file: Option<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            inventory_file: inventory_file.unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_FILE)),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.data_dir.clone(), cli.inventory_file.clone())
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn product_path(&self) -> PathBuf {
        self.data_file(PRODUCT_FILE)
    }

    pub fn material_path(&self) -> PathBuf {
        self.data_file(MATERIAL_FILE)
    }

    pub fn sales_path(&self) -> PathBuf {
        self.data_file(SALES_FILE)
    }

    fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(".", None)
    }
}
