// src/core/scanner/lines.rs
use std::fs::File;
use std::io::Read as _;
use std::path::Path;
use tracing::debug;

/// Counts the lines of the file at `path`.
///
/// Returns `None` when the file cannot be opened. Content that cannot be read
/// or is not valid UTF-8 counts as zero lines.
#[must_use]
pub fn count_file_lines(path: &Path) -> Option<u64> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "cannot open file, skipping line count");
            return None;
        }
    };

    let mut bytes = Vec::new();
    if let Err(err) = file.read_to_end(&mut bytes) {
        debug!(path = %path.display(), error = %err, "cannot read file, counting zero lines");
        return Some(0);
    }

    match std::str::from_utf8(&bytes) {
        Ok(text) => Some(count_lines(text)),
        Err(_) => {
            debug!(path = %path.display(), "file is not valid UTF-8, counting zero lines");
            Some(0)
        }
    }
}

/// Counts lines with universal newline handling: `\n`, `\r\n` and a lone `\r`
/// each end a line, and a trailing unterminated line counts as well.
#[must_use]
pub fn count_lines(text: &str) -> u64 {
    let mut lines: u64 = 0;
    let mut chars = text.chars().peekable();
    let mut open_line = false;

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                lines = lines.saturating_add(1);
                open_line = false;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines = lines.saturating_add(1);
                open_line = false;
            }
            _ => open_line = true,
        }
    }

    if open_line {
        lines = lines.saturating_add(1);
    }
    lines
}
