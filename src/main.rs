// src/main.rs

use clap::Parser;
use payload_dispatch::{config::Config, ingest};
use std::io::{self, Write};
use std::process::ExitCode;

/// The main entry point for the payload dispatcher.
#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match ingest::run(&config, &mut out).await {
        Ok(report) => {
            if report.skipped > 0 && !config.quiet {
                eprintln!("Skipped {} invalid lines", report.skipped);
            }
            if let Err(e) = out.flush() {
                eprintln!("Failed to flush output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
