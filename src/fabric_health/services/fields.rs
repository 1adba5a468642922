//! Structural field extraction shared by the line parsers.
//!
//! Line matching is first-match-wins and failure means "this line carries
//! nothing for us", so every helper returns `Option` and never panics.

/// Splits a leading run of ASCII digits off `input`.
pub(crate) fn leading_digits(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        None
    } else {
        Some(input.split_at(end))
    }
}

/// Returns the contents of the next double-quoted section together with
/// the remainder after the closing quote.
pub(crate) fn next_quoted(input: &str) -> Option<(&str, &str)> {
    let start = input.find('"')?;
    let rest = &input[start + 1..];
    let end = rest.find('"')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Requires at least one whitespace character and skips the whole run.
pub(crate) fn after_whitespace(input: &str) -> Option<&str> {
    if input.starts_with(char::is_whitespace) {
        Some(input.trim_start())
    } else {
        None
    }
}
