//! Layout computation: the shared alignment column and comment word-wrapping.

use crate::split::SplitLine;

/// Margin added to the widest tree line so the widest entry still gets a gap.
const ALIGN_MARGIN: usize = 3;

/// Width of a string in characters. Tree-drawing glyphs count as one column;
/// no Unicode display-width tables are consulted.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Column at which all comments start in aligned style.
///
/// Requires the full set of lines up front: the result depends on the widest
/// tree content seen anywhere in the input. Lines without a marker contribute
/// their whole length even though they are never padded.
pub fn alignment_width(lines: &[SplitLine], gap: usize) -> usize {
    let max_tree = lines
        .iter()
        .filter_map(|line| match line {
            SplitLine::Blank => None,
            SplitLine::Plain(text) => Some(char_width(text)),
            SplitLine::Commented { tree, .. } => Some(char_width(tree)),
        })
        .max()
        .unwrap_or(0);
    gap.max(max_tree + ALIGN_MARGIN)
}

/// Greedily word-wrap a comment to `max_line_len` characters per fragment.
///
/// Wrapping is strictly opt-in: disabled (or an empty comment) yields a
/// single fragment with the comment unchanged, however long. A single word
/// longer than the limit is never split; it occupies a fragment by itself.
pub fn wrap_comment(comment: &str, max_line_len: usize, wrap: bool) -> Vec<String> {
    if !wrap || comment.is_empty() {
        return vec![comment.to_string()];
    }

    let mut fragments = Vec::new();
    let mut current = String::new();
    for word in comment.split_whitespace() {
        if char_width(&current) + char_width(word) + 1 <= max_line_len {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                fragments.push(current);
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        fragments.push(current);
    }
    if fragments.is_empty() {
        // All-whitespace comment: still at least one fragment.
        fragments.push(String::new());
    }
    fragments
}
