//! Line classification: separating tree content from a trailing comment.

/// One input line classified against the comment marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitLine {
    /// Empty or all-whitespace line.
    Blank,
    /// No marker found; the original line is kept verbatim.
    Plain(String),
    /// Marker found: tree drawing before it, annotation after it.
    Commented { tree: String, comment: String },
}

/// Split a line at the first occurrence of `marker`.
///
/// Pure and total: every input yields a `SplitLine`. The tree part is
/// right-trimmed only when a marker is present; the comment has the marker
/// consumed once (even a multi-character one) and is trimmed at both ends.
pub fn split(line: &str, marker: &str) -> SplitLine {
    if line.trim().is_empty() {
        return SplitLine::Blank;
    }
    match line.find(marker) {
        None => SplitLine::Plain(line.to_string()),
        Some(pos) => SplitLine::Commented {
            tree: line[..pos].trim_end().to_string(),
            comment: line[pos + marker.len()..].trim().to_string(),
        },
    }
}
