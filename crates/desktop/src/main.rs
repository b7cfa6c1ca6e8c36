//! Inventory shell entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use stockdesk_desktop::commands::{EXIT_NOTHING_CHANGED, usage_exit_code};
use stockdesk_desktop::{Cli, exit_code, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };
    stockdesk_observability::init(cli.log_format);

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = exit_code(&error);
            if code == EXIT_NOTHING_CHANGED {
                tracing::warn!(error = %format!("{error:#}"), "command had no effect");
                eprintln!("warning: {error:#} (nothing changed)");
            } else {
                tracing::error!(error = %format!("{error:#}"), "command failed");
                eprintln!("error: {error:#}");
            }
            ExitCode::from(code)
        }
    }
}
