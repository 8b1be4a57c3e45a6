//! readiness-check CLI
//!
//! Exits 0 when the requested data is ready and 1 when it is not.

use clap::Parser;
use readiness_check::cli::{Cli, Runner};
use readiness_check::Credentials;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// Debug verbosity for this crate unless `RUST_LOG` says otherwise. Each
/// line carries a timestamp and the span of the function that emitted it.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("readiness_check=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    // Credentials are checked before arguments are parsed
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let cli = Cli::parse();
    let runner = Runner::new(cli, credentials);

    match runner.run().await {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
