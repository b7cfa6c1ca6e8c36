//! CLI argument definitions for the inventory shell.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockdesk_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "stockdesk",
    version,
    about = "Inventory management and stock analysis",
    long_about = "Track item quantities and reorder levels in a CSV inventory file,\n\
                  and review product, material and sales data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Login name.
    #[arg(long, env = "STOCKDESK_USER", global = true)]
    pub user: Option<String>,

    /// Login password.
    #[arg(long, env = "STOCKDESK_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Directory holding the inventory and data files.
    #[arg(
        long = "data-dir",
        env = "STOCKDESK_DATA_DIR",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Inventory file, relative to the data directory unless absolute.
    #[arg(
        long = "inventory-file",
        env = "STOCKDESK_INVENTORY_FILE",
        value_name = "PATH",
        global = true
    )]
    pub inventory_file: Option<PathBuf>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// View and edit inventory records.
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Sales trends, seasonality and stock levels.
    Report(ReportArgs),

    /// Descriptive statistics of a data file.
    Stats(StatsArgs),
}

#[derive(Debug, Subcommand)]
pub enum InventoryCommand {
    /// Show every record with its selection index.
    List,

    /// Add a new item.
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "QUANTITY", allow_hyphen_values = true)]
        quantity: String,
        #[arg(value_name = "REORDER_LEVEL", allow_hyphen_values = true)]
        reorder_level: String,
    },

    /// Set the quantity of an item: `update <NAME> <QUANTITY>` or `update --index N <QUANTITY>`.
    Update(UpdateArgs),

    /// Remove an item by name or selection index.
    Remove(RemoveArgs),

    /// Replace the inventory with one record per product.
    Reset {
        /// Confirm overwriting every record.
        #[arg(long)]
        yes: bool,
    },

    /// Show records at or below their reorder level.
    Reorder,
}

/// A record addressed by name or by its selection index in `inventory list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Name(String),
    Index(usize),
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Zero-based selection index from `inventory list`.
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// `[NAME] QUANTITY`; omit the name when `--index` is given.
    #[arg(
        value_name = "NAME QUANTITY",
        num_args = 1..=2,
        required = true,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,
}

impl UpdateArgs {
    /// Split the positional values into the addressed record and the new quantity.
    pub fn resolve(&self) -> Result<(Target, &str), String> {
        match (self.index, self.values.as_slice()) {
            (Some(index), [quantity]) => Ok((Target::Index(index), quantity.as_str())),
            (None, [name, quantity]) => Ok((Target::Name(name.clone()), quantity.as_str())),
            (Some(_), _) => Err("with --index, give only the new quantity".to_string()),
            (None, _) => Err("give an item name and the new quantity".to_string()),
        }
    }
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(value_name = "NAME", required_unless_present = "index", conflicts_with = "index")]
    pub name: Option<String>,

    /// Zero-based selection index from `inventory list`.
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,
}

impl RemoveArgs {
    pub fn target(&self) -> Option<Target> {
        match (&self.name, self.index) {
            (Some(name), _) => Some(Target::Name(name.clone())),
            (None, Some(index)) => Some(Target::Index(index)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Restrict period series to one calendar month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(value_enum)]
    pub dataset: Dataset,

    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Data file described by `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Sales,
    Materials,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["stockdesk"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn update_by_name_or_index() {
        let cli = parse(&["inventory", "update", "Item A", "7"]);
        let Command::Inventory(InventoryCommand::Update(args)) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(
            args.resolve().unwrap(),
            (Target::Name("Item A".to_string()), "7")
        );

        let cli = parse(&["inventory", "update", "--index", "2", "9"]);
        let Command::Inventory(InventoryCommand::Update(args)) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.resolve().unwrap(), (Target::Index(2), "9"));
    }

    #[test]
    fn update_rejects_name_with_index() {
        let cli = parse(&["inventory", "update", "--index", "0", "Item A", "7"]);
        let Command::Inventory(InventoryCommand::Update(args)) = cli.command else {
            panic!("expected update");
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn negative_quantity_reaches_validation() {
        let cli = parse(&["inventory", "add", "Bolts", "-5", "1"]);
        let Command::Inventory(InventoryCommand::Add { quantity, .. }) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(quantity, "-5");
    }

    #[test]
    fn remove_needs_exactly_one_target() {
        let mut argv = vec!["stockdesk", "inventory", "remove"];
        assert!(Cli::try_parse_from(argv.clone()).is_err());

        argv.extend(["Item A", "--index", "1"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn month_must_be_a_calendar_month() {
        assert!(Cli::try_parse_from(["stockdesk", "report", "--month", "13"]).is_err());
        let cli = parse(&["report", "--month", "12", "--format", "json"]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.month, Some(12));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn log_format_is_parsed() {
        let cli = parse(&["--log-format", "json", "inventory", "list"]);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
