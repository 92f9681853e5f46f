/// Characters that separate tokens: space, tab, carriage return, newline
/// and the bell/alert character.
const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Splits a line into whitespace-delimited tokens.
///
/// A token is a maximal run of non-delimiter characters; runs of delimiters
/// collapse, so the result never contains an empty string. No quoting,
/// escaping, or substitution of any kind. The tokens borrow from `line`,
/// which therefore has to outlive the returned vector — the command loop
/// keeps both alive for exactly one iteration.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(DELIMITERS).filter(|t| !t.is_empty()).collect()
}
