// src/tokenizer.rs

/// Extracts the run of characters from `start` up to the next space or the end of `text`.
///
/// Returns `None` when that run is empty, which is how callers detect a missing
/// argument. Offsets past the end of the line, or inside a multi-byte character,
/// are treated as empty. Only `' '` delimits a token; tabs are ordinary characters.
pub fn extract_token(text: &str, start: usize) -> Option<String> {
    let rest = text.get(start..)?;
    let end = rest.find(' ').unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(rest[..end].to_string())
    }
}
