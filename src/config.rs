// src/config.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// Lines longer than this are skipped; matches a 1024-byte line buffer.
pub const MAX_LINE_LENGTH: usize = 1023;
// Starting capacity of a fresh payload buffer.
pub const INITIAL_CAPACITY: usize = 1;

/// Reads chat payloads from a file, one per line, and prints each one.
#[derive(Parser, Debug, Clone)]
#[command(name = "payload-dispatch", version)]
pub struct Config {
    /// File containing one payload per line.
    pub input: PathBuf,

    /// Buffer every payload before processing, or process each line as it is read.
    #[arg(long, value_enum, default_value_t = Mode::Buffered)]
    pub mode: Mode,

    /// Output format for processed payloads.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the reading/processing progress lines.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Buffered,
    Streaming,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
