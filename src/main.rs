// src/main.rs
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::debug;

use sffu::cli::{Cli, init_tracing, run};
use sffu::FieldUsageError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors, including an unknown --metadata kind, share exit status 1.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "find failed");
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<FieldUsageError>()
                .map_or(1, FieldUsageError::exit_code);
            ExitCode::from(code)
        }
    }
}
