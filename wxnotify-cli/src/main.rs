//! Binary crate for the `wxnotify` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring configuration into the core clients
//! - Mapping failures to distinct process exit codes

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(cmd.log_level)
            .finish(),
    )
    .expect("failed to set tracing subscriber");

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<wxnotify_core::Error>()
                .map(wxnotify_core::Error::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
