// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// One classified line of chat input.
/// Serialized as JSON with a `type` field naming the variant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")] // variant name goes in "type", fields sit beside it
pub enum Payload {
    LoginCommand { username: String, password: String },
    JoinCommand { channel: String },
    LogoutCommand,
    DirectMessage { recipient: String, content: String },
    GroupMessage { channel: String, content: String },
    GlobalMessage { content: String },
}

/// Which addressed message a line was meant to be, named in parse errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    DirectMessage,
    GroupMessage,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::DirectMessage => f.write_str("direct message"),
            MessageKind::GroupMessage => f.write_str("group message"),
        }
    }
}

impl Payload {
    /// Releases the owned text fields and returns how many there were.
    ///
    /// Dropping a payload frees the same memory; this form reports the count
    /// so teardown can be checked by callers.
    pub fn release(self) -> usize {
        // Fields are dropped when `self` goes out of scope here.
        match self {
            Payload::LogoutCommand => 0,
            Payload::JoinCommand { .. } | Payload::GlobalMessage { .. } => 1,
            Payload::LoginCommand { .. }
            | Payload::DirectMessage { .. }
            | Payload::GroupMessage { .. } => 2,
        }
    }
}

/// Converts a Payload to the human-readable processing output.
/// Command payloads span two lines; messages span one. No trailing newline.
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // "password" carries no colon in the tool's established output.
            Payload::LoginCommand { username, password } => write!(
                f,
                "Command: login\n  Arguments: [username: {}, password {}]",
                username, password
            ),
            Payload::JoinCommand { channel } => {
                write!(f, "Command: join\n  Arguments: [channel: {}]", channel)
            }
            Payload::LogoutCommand => f.write_str("Command: logout\n  Arguments: []"),
            Payload::DirectMessage { recipient, content } => {
                write!(f, "Direct message to {}: {}", recipient, content)
            }
            Payload::GroupMessage { channel, content } => {
                write!(f, "Group message to {}: {}", channel, content)
            }
            Payload::GlobalMessage { content } => write!(f, "Global message: {}", content),
        }
    }
}
