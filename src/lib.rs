// src/lib.rs

//! Line-oriented chat payload parsing and dispatch.
//!
//! Each input line is classified by its first character into a [`Payload`]:
//! `/login`, `/join` and `/logout` commands, `@user` direct messages,
//! `#channel` group messages, and global messages for everything else.
//! Parsed payloads are collected in a [`PayloadBuffer`] and drained in order.
//!
//! ```text
//! line → tokenizer → parser → Payload → PayloadBuffer → process (print) → destroy
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod tokenizer;

pub use buffer::PayloadBuffer;
pub use error::{IngestError, ParseError};
pub use models::{MessageKind, Payload};
pub use parser::parse;
pub use tokenizer::extract_token;
