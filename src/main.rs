//! CARDCROP CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch,
//! and exit with the status the run produced. For programmatic use, prefer
//! the library API (`cardcrop::api`).

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}
