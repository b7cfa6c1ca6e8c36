//! Command handlers.
//!
//! Handlers write their output to a caller-supplied writer so they can be
//! driven from tests; only `main` touches stdout and the exit code.

use std::io::Write;

use anyhow::{Context, Result, anyhow, bail};
use stockdesk_analytics::{MonthFilter, Report, describe_file};
use stockdesk_auth::{CredentialTable, Session};
use stockdesk_core::DomainError;
use stockdesk_inventory::{InventoryError, InventoryStore};
use stockdesk_products::{load_materials, load_products};
use stockdesk_sales::load_sales;

use crate::cli::{
    Cli, Command, Dataset, InventoryCommand, OutputFormat, ReportArgs, StatsArgs, Target,
};
use crate::config::AppConfig;
use crate::render::{inventory_table, stats_table, write_report};

/// Exit code for a reported mismatch (unknown item, duplicate name).
pub const EXIT_NOTHING_CHANGED: u8 = 2;
/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// A logged-in session with its inventory store open.
#[derive(Debug)]
pub struct Shell {
    config: AppConfig,
    session: Session,
    store: InventoryStore,
}

impl Shell {
    /// Log in, then initialize, load and re-save the inventory file.
    pub fn start(
        config: AppConfig,
        credentials: &CredentialTable,
        user: &str,
        password: &str,
    ) -> Result<Self> {
        let session = credentials.login(user, password)?;

        let path = config.inventory_path();
        let store = InventoryStore::open(&path)
            .with_context(|| format!("open inventory {}", path.display()))?;
        store.flush().context("re-save inventory")?;

        tracing::info!(
            user = %session.user,
            path = %path.display(),
            records = store.table().len(),
            "shell started"
        );
        Ok(Self {
            config,
            session,
            store,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn inventory(&mut self, command: &InventoryCommand, out: &mut impl Write) -> Result<()> {
        match command {
            InventoryCommand::List => {
                let table = self.store.table();
                if table.is_empty() {
                    writeln!(out, "Inventory is empty.")?;
                } else {
                    writeln!(out, "{}", inventory_table(table.iter().enumerate()))?;
                }
            }
            InventoryCommand::Add {
                name,
                quantity,
                reorder_level,
            } => {
                let record = self.store.add(name, quantity, reorder_level)?;
                writeln!(out, "Added {record}")?;
            }
            InventoryCommand::Update(args) => {
                let (target, quantity) = args.resolve().map_err(|msg| anyhow!(msg))?;
                let (name, previous) = match target {
                    Target::Name(name) => {
                        let previous = self.store.update(&name, quantity)?;
                        (name, previous)
                    }
                    Target::Index(index) => self.store.update_at(index, quantity)?,
                };
                let current = self
                    .store
                    .table()
                    .get(&name)
                    .map(|r| r.quantity)
                    .unwrap_or(previous);
                writeln!(out, "Updated {name}: {previous} -> {current}")?;
            }
            InventoryCommand::Remove(args) => {
                let removed = match args.target() {
                    Some(Target::Name(name)) => self.store.remove(&name)?,
                    Some(Target::Index(index)) => self.store.remove_at(index)?,
                    None => bail!("give an item name or --index"),
                };
                writeln!(out, "Removed {removed}")?;
            }
            InventoryCommand::Reset { yes } => {
                if !yes {
                    bail!("reset replaces every inventory record; pass --yes to confirm");
                }
                let path = self.config.product_path();
                let products = load_products(&path)
                    .with_context(|| format!("load products from {}", path.display()))?;
                let table = self.store.reset_from_source(&products)?;
                writeln!(out, "Inventory reset from {} products.", table.len())?;
            }
            InventoryCommand::Reorder => {
                let table = self.store.table();
                let due: Vec<_> = table
                    .iter()
                    .enumerate()
                    .filter(|(_, record)| record.needs_reorder())
                    .collect();
                if due.is_empty() {
                    writeln!(out, "No items at or below their reorder level.")?;
                } else {
                    writeln!(out, "{}", inventory_table(due))?;
                }
            }
        }
        Ok(())
    }

    pub fn report(&self, args: &ReportArgs, out: &mut impl Write) -> Result<()> {
        let month = args.month.map_or(MonthFilter::All, MonthFilter::Month);

        let product_path = self.config.product_path();
        let products = load_products(&product_path)
            .with_context(|| format!("load products from {}", product_path.display()))?;
        let material_path = self.config.material_path();
        let materials = load_materials(&material_path)
            .with_context(|| format!("load materials from {}", material_path.display()))?;
        let sales_path = self.config.sales_path();
        let sales = load_sales(&sales_path)
            .with_context(|| format!("load sales from {}", sales_path.display()))?;

        let report = Report::build(&products, &materials, &sales, month);
        match args.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
            OutputFormat::Table => write_report(out, &report)?,
        }
        Ok(())
    }

    pub fn stats(&self, args: &StatsArgs, out: &mut impl Write) -> Result<()> {
        let path = match args.dataset {
            Dataset::Sales => self.config.sales_path(),
            Dataset::Materials => self.config.material_path(),
        };
        let stats = describe_file(&path).with_context(|| format!("describe {}", path.display()))?;

        match args.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &stats)?;
                writeln!(out)?;
            }
            OutputFormat::Table => {
                writeln!(out, "Statistics for {}", path.display())?;
                writeln!(out, "{}", stats_table(&stats))?;
            }
        }
        Ok(())
    }
}

/// Log in and run one command against the configured data directory.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = AppConfig::from_cli(cli);
    let mut shell = Shell::start(
        config,
        &CredentialTable::default(),
        cli.user.as_deref().unwrap_or_default(),
        cli.password.as_deref().unwrap_or_default(),
    )?;

    let span = tracing::info_span!("command", user = %shell.session().user);
    let _guard = span.enter();
    match &cli.command {
        Command::Inventory(command) => shell.inventory(command, out),
        Command::Report(args) => shell.report(args, out),
        Command::Stats(args) => shell.stats(args, out),
    }
}

/// Map a failed command to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let recoverable = err.chain().any(|cause| {
        cause
            .downcast_ref::<InventoryError>()
            .is_some_and(InventoryError::is_recoverable)
            || cause
                .downcast_ref::<DomainError>()
                .is_some_and(|e| !e.is_validation())
    });
    if recoverable {
        EXIT_NOTHING_CHANGED
    } else {
        EXIT_FAILURE
    }
}

/// Exit code for a command line clap rejected.
///
/// `--help` and `--version` succeed. Every other usage error is a failure,
/// so it never collides with [`EXIT_NOTHING_CHANGED`].
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => EXIT_FAILURE,
    }
}
