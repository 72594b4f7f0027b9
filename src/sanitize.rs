use crate::consts::NAME_MAX_CHARS;

/// Strips everything but letters and spaces from a name, keeping at most
/// `NAME_MAX_CHARS` characters. Letters are Unicode letters, not just ASCII.
///
/// Applied on every keystroke before the value is stored; stripping is
/// silent and never surfaces as an error. Idempotent.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .take(NAME_MAX_CHARS)
        .collect()
}

/// Strips everything but ASCII digits, keeping at most `max_len` characters.
///
/// Applied on every keystroke to the day, month, and year fields. Idempotent.
#[must_use]
pub fn sanitize_digits(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}
