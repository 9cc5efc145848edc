//! Shared line-scanning helpers.
//!
//! The parser, and any console layer sitting in front of it, deal in plain
//! space-separated text. These helpers keep the slicing rules in one place:
//! only the ASCII space is a separator, and a matched pair of double quotes
//! makes one segment out of whatever it encloses.

/// Strip leading and trailing spaces.
///
/// Only `' '` is stripped; control characters never reach the parser from a
/// line-edited console.
pub fn trim_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}

/// Byte offset of the next flag candidate, i.e. the next `-`.
pub fn find_flag(text: &str) -> Option<usize> {
    text.find('-')
}

/// The leading token of `text`: everything up to the first space.
pub fn token(text: &str) -> &str {
    match text.find(' ') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Extract a run of `count` parameter segments from the front of `text`.
///
/// Leading spaces are skipped. A segment normally ends at the next space; a
/// segment opening with `"` instead runs to the closing quote (or the end of
/// the text if the quote is never closed) and keeps both quote characters,
/// so `"two words"` comes back as one segment.
///
/// Returns the extracted run and the byte offset just past it, which is
/// where scanning should resume.
pub fn parameter_run(text: &str, count: u8) -> (&str, usize) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    let start = i;
    let mut end = start;
    for _ in 0..count {
        while i < bytes.len() && bytes[i] == b' ' {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        if bytes[i] == b'"' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            if i < bytes.len() {
                i += 1;
            }
        } else {
            while i < bytes.len() && bytes[i] != b' ' {
                i += 1;
            }
        }
        end = i;
    }
    (&text[start..end], end)
}
