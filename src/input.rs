use std::io::BufRead;

/// Reads one line and returns the trimmed username, or `None` when the line
/// is empty or whitespace-only. Read failures on stdin count as empty input.
pub fn read_username(mut reader: impl BufRead) -> Option<String> {
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;

    let username = line.trim();
    if username.is_empty() {
        None
    } else {
        Some(username.to_string())
    }
}
