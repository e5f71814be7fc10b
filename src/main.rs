//! CLI entry point for ccs.

use ccs::app::{self, Paths};
use ccs::cli::Args;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing();

    let paths = match Paths::resolve(args.config, args.settings) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match app::run(args.command, &paths) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            for line in &report.lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `CCS_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CCS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
