// src/parser.rs

use crate::error::ParseError;
use crate::models::{MessageKind, Payload};
use crate::tokenizer::extract_token;
use std::str::FromStr;

/// Longest command name read after the leading `/`.
const MAX_COMMAND_NAME: usize = 6;

// Argument offsets for commands: "/login " and "/join " are 7 and 6 bytes.
const LOGIN_ARGS_OFFSET: usize = 7;
const JOIN_ARGS_OFFSET: usize = 6;

/// Classifies one raw line and extracts its fields.
///
/// Lines starting with `/` are commands, `@` direct messages, `#` group
/// messages; anything else is a global message carried verbatim.
pub fn parse(line: &str) -> Result<Payload, ParseError> {
    match line.chars().next() {
        None => Err(ParseError::EmptyLine),
        Some('/') => parse_command(line),
        Some('@') => parse_direct(line),
        Some('#') => parse_group(line),
        Some(_) => Ok(Payload::GlobalMessage {
            content: line.to_string(),
        }),
    }
}

impl FromStr for Payload {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse(line)
    }
}

/// Reads up to six characters after the slash, stopping at a space.
fn command_name(line: &str) -> &str {
    let after_slash = &line[1..];
    let end = after_slash
        .char_indices()
        .take(MAX_COMMAND_NAME)
        .take_while(|&(_, c)| c != ' ')
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &after_slash[..end]
}

fn parse_command(line: &str) -> Result<Payload, ParseError> {
    match command_name(line) {
        "login" => {
            let username = extract_token(line, LOGIN_ARGS_OFFSET).ok_or(
                ParseError::MissingArgument {
                    command: "login",
                    argument: "username",
                },
            )?;
            let password = extract_token(line, LOGIN_ARGS_OFFSET + username.len() + 1).ok_or(
                ParseError::MissingArgument {
                    command: "login",
                    argument: "password",
                },
            )?;
            Ok(Payload::LoginCommand { username, password })
        }
        "join" => {
            let channel =
                extract_token(line, JOIN_ARGS_OFFSET).ok_or(ParseError::MissingArgument {
                    command: "join",
                    argument: "channel",
                })?;
            Ok(Payload::JoinCommand { channel })
        }
        "logout" => Ok(Payload::LogoutCommand),
        other => Err(ParseError::UnknownCommand {
            name: other.to_string(),
        }),
    }
}

/// Splits `<sigil>target content` into the target token and the content.
fn split_addressed(line: &str, kind: MessageKind) -> Result<(String, String), ParseError> {
    // Token starts right after the one-byte sigil.
    let target = extract_token(line, 1).ok_or(ParseError::MissingRecipient { kind })?;
    // Skip sigil, token, and exactly one separating space.
    let content = line
        .get(target.len() + 2..)
        .unwrap_or_default()
        .to_string();
    Ok((target, content))
}

fn parse_direct(line: &str) -> Result<Payload, ParseError> {
    let (recipient, content) = split_addressed(line, MessageKind::DirectMessage)?;
    Ok(Payload::DirectMessage { recipient, content })
}

fn parse_group(line: &str) -> Result<Payload, ParseError> {
    let (channel, content) = split_addressed(line, MessageKind::GroupMessage)?;
    Ok(Payload::GroupMessage { channel, content })
}
