//! Line format of the mappings file: `<token>,<url>\n`.
//!
//! No header and no escaping. A URL that contains a comma is written as-is
//! and its line is skipped on the next load. Line breaks would split a record
//! into a truncated mapping, so the store refuses URLs that contain them.

/// Field separator.
pub const SEPARATOR: char = ',';

/// Parse one line into `(token, url)`.
///
/// The line must split into exactly two non-empty fields. Anything else is
/// malformed and yields `None`; callers skip it.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(SEPARATOR);
    let token = fields.next()?;
    let url = fields.next()?;
    if fields.next().is_some() || token.is_empty() || url.is_empty() {
        return None;
    }
    Some((token, url))
}

/// Serialize one mapping, including the trailing newline.
pub fn format_line(token: &str, url: &str) -> String {
    format!("{token}{SEPARATOR}{url}\n")
}

/// Bytes before the first separator, or the whole line, ignoring one
/// trailing `\r`. Used to match lines for deletion on the raw file, so
/// malformed and non-UTF-8 lines are matched the same way valid ones are.
pub fn first_field(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.split(|&b| b == SEPARATOR as u8).next().unwrap_or(line)
}

/// True if `url` contains the separator and will be skipped on reload.
pub fn has_separator(url: &str) -> bool {
    url.contains(SEPARATOR)
}

/// True if `url` contains `\n` or `\r`; such a URL cannot be stored.
pub fn has_line_break(url: &str) -> bool {
    url.contains(['\n', '\r'])
}
