//! Pure text helpers used by the extractor and the message formatter.
//!
//! Lengths are counted in characters, not bytes: listing text is mostly
//! French and a byte slice would split accented characters.

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Unlike a fixed-width summary the marker is added after the kept prefix,
/// so a truncated result is `max_chars + 3` characters long.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
