//! `stockdesk-desktop`
//!
//! **Responsibility:** the terminal shell in front of the inventory store.
//!
//! This crate provides:
//! - Command-line parsing and configuration resolution
//! - The login gate
//! - Inventory editing, the analysis report and file statistics
//!
//! The shell is a **thin layer**: all rules live in the library crates.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;

pub use cli::Cli;
pub use commands::{Shell, exit_code, run};
pub use config::AppConfig;
