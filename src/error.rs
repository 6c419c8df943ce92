// src/error.rs

use crate::models::MessageKind;
use std::path::PathBuf;
use thiserror::Error;

/// A line that could not be turned into a [`Payload`](crate::models::Payload).
///
/// Every variant is recoverable: the line is discarded and ingestion continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty line")]
    EmptyLine,
    #[error("unknown command {name}")]
    UnknownCommand { name: String },
    #[error("command {command} is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{kind} has no recipient")]
    MissingRecipient { kind: MessageKind },
    #[error("line is {length} bytes long, limit is {limit}")]
    LineTooLong { length: usize, limit: usize },
}

impl ParseError {
    /// The rejected command name, when the line was an unrecognized `/command`.
    pub fn unknown_command(&self) -> Option<&str> {
        match self {
            ParseError::UnknownCommand { name } => Some(name),
            _ => None,
        }
    }
}

/// Failures of the line-reading loop around the parser.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
