//! Rendering: aligned-column and decorator styles, plus the two-pass driver
//! that reads, measures, and writes a whole stream.

use crate::layout::{alignment_width, char_width, wrap_comment};
use crate::split::{split, SplitLine};
use std::io::{self, BufRead, Write};

/// Configuration for one formatting run. Built once by the caller and never
/// mutated; `max_width` arrives already resolved (flag or terminal probe).
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub comment_marker: String,
    pub gap: usize,
    pub max_width: usize,
    pub decorator: bool,
    pub separator: String,
    pub wrap: bool,
    pub indent: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            comment_marker: "#".to_string(),
            gap: 30,
            max_width: 80,
            decorator: false,
            separator: "-----".to_string(),
            wrap: false,
            indent: 0,
        }
    }
}

/// Summary of a completed run, for the verbose diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatStats {
    /// Input lines consumed (blank lines included).
    pub lines: usize,
    /// Comment column shared by all aligned lines of the run.
    pub alignment_width: usize,
}

/// Format a complete stream.
///
/// Phase 1 reads and splits every input line, then computes the alignment
/// column from the widest tree content. Phase 2 renders each line in input
/// order, writing immediately. Read and write errors abort the run.
pub fn format_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &FormatConfig,
) -> io::Result<FormatStats> {
    let mut lines = Vec::new();
    for raw in reader.lines() {
        let raw = raw?;
        // CRLF input: the trailing \r is line-ending, not content.
        let raw = raw.strip_suffix('\r').unwrap_or(&raw);
        lines.push(split(raw, &config.comment_marker));
    }

    let align = alignment_width(&lines, config.gap);
    let comment_max = config.max_width.saturating_sub(align + 1);

    for line in &lines {
        match line {
            SplitLine::Blank => writer.write_all(b"\n")?,
            SplitLine::Plain(text) => writeln!(writer, "{text}")?,
            SplitLine::Commented { tree, comment } => {
                let fragments = wrap_comment(comment, comment_max, config.wrap);
                if config.decorator {
                    render_decorator(writer, tree, &fragments, config)?;
                } else {
                    render_aligned(writer, tree, &fragments, align, config.indent)?;
                }
            }
        }
    }

    Ok(FormatStats {
        lines: lines.len(),
        alignment_width: align,
    })
}

/// Emit one commented line in aligned style: the comment starts at `align`,
/// continuation fragments line up under it (plus any extra indent).
fn render_aligned<W: Write>(
    writer: &mut W,
    tree: &str,
    fragments: &[String],
    align: usize,
    indent: usize,
) -> io::Result<()> {
    let padding = " ".repeat(align.saturating_sub(char_width(tree)));
    writeln!(writer, "{tree}{padding}{}", fragments[0])?;

    let continuation = " ".repeat(align + indent);
    for fragment in &fragments[1..] {
        writeln!(writer, "{continuation}{fragment}")?;
    }
    Ok(())
}

/// Emit one commented line in decorator style: tree content, a separator
/// run sized to fill the remaining width, then the comment.
fn render_decorator<W: Write>(
    writer: &mut W,
    tree: &str,
    fragments: &[String],
    config: &FormatConfig,
) -> io::Result<()> {
    let first = &fragments[0];
    // 3 reserves the two surrounding spaces plus a margin.
    let available = config
        .max_width
        .saturating_sub(char_width(tree) + char_width(first) + 3);
    let decorator = build_decorator(&config.separator, available);
    writeln!(writer, "{tree} {decorator} {first}")?;

    let base_indent = " ".repeat(char_width(tree));
    let comment_indent = " ".repeat(char_width(&decorator) + 1);
    let extra_indent = " ".repeat(config.indent);
    for fragment in &fragments[1..] {
        writeln!(writer, "{base_indent} {comment_indent}{extra_indent}{fragment}")?;
    }
    Ok(())
}

/// Repeat `pattern` until it covers `available` characters, then truncate to
/// exactly that many. Never empty: a degenerate width collapses to `"-"`.
fn build_decorator(pattern: &str, available: usize) -> String {
    let pattern_width = char_width(pattern);
    if available == 0 || pattern_width == 0 {
        return "-".to_string();
    }
    let repeats = available.div_ceil(pattern_width);
    pattern.repeat(repeats).chars().take(available).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, config: &FormatConfig) -> (String, FormatStats) {
        let mut out = Vec::new();
        let stats = format_stream(input.as_bytes(), &mut out, config).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn decorator_single_char_pattern_repeats_exactly() {
        assert_eq!(build_decorator("-", 5), "-----");
    }

    #[test]
    fn decorator_multi_char_pattern_truncates_to_width() {
        assert_eq!(build_decorator("=-", 5), "=-=-=");
        assert_eq!(build_decorator("=-", 4), "=-=-");
    }

    #[test]
    fn decorator_zero_width_collapses_to_single_dash() {
        assert_eq!(build_decorator("-----", 0), "-");
        assert_eq!(build_decorator("=-", 0), "-");
    }

    #[test]
    fn aligned_end_to_end_shares_one_column() {
        let input = ".\n\u{251c}\u{2500}\u{2500} src # Source\n\u{2514}\u{2500}\u{2500} pkg.json # Config\n";
        let config = FormatConfig {
            gap: 10,
            ..FormatConfig::default()
        };
        let (out, stats) = run(input, &config);
        // widest tree content is 12 chars, so the column is 15
        assert_eq!(stats.alignment_width, 15);
        assert_eq!(
            out,
            ".\n\u{251c}\u{2500}\u{2500} src        Source\n\u{2514}\u{2500}\u{2500} pkg.json   Config\n"
        );
    }

    #[test]
    fn plain_lines_pass_through_verbatim() {
        let input = "no marker here   \n";
        let (out, _) = run(input, &FormatConfig::default());
        assert_eq!(out, "no marker here   \n");
    }

    #[test]
    fn blank_lines_emit_exactly_one_newline() {
        let input = "a # x\n\nb # y\n";
        let (out, stats) = run(input, &FormatConfig::default());
        assert_eq!(stats.lines, 3);
        let expected = format!("a{pad}x\n\nb{pad}y\n", pad = " ".repeat(29));
        assert_eq!(out, expected);
    }

    #[test]
    fn crlf_input_is_treated_as_line_endings() {
        let input = "a # x\r\nb # y\r\n";
        let (out, _) = run(input, &FormatConfig::default());
        assert!(!out.contains('\r'));
        assert!(out.starts_with(&format!("a{}x\n", " ".repeat(29))));
    }

    #[test]
    fn tree_wider_than_column_gets_no_padding_but_is_never_truncated() {
        let input = "short # a\nan-extremely-wide-tree-entry-line # b\n";
        let config = FormatConfig {
            gap: 5,
            ..FormatConfig::default()
        };
        let (out, stats) = run(input, &config);
        // 33-char tree + margin
        assert_eq!(stats.alignment_width, 36);
        assert!(out.contains("an-extremely-wide-tree-entry-line   b\n"));
    }

    #[test]
    fn aligned_wrap_places_continuations_under_the_comment_column() {
        let input = "a # alpha beta gamma delta\n";
        let config = FormatConfig {
            gap: 5,
            max_width: 17,
            wrap: true,
            ..FormatConfig::default()
        };
        let (out, stats) = run(input, &config);
        assert_eq!(stats.alignment_width, 5);
        assert_eq!(out, "a    alpha beta\n     gamma delta\n");
    }

    #[test]
    fn aligned_wrap_honors_extra_indent() {
        let input = "a # alpha beta gamma delta\n";
        let config = FormatConfig {
            gap: 5,
            max_width: 17,
            wrap: true,
            indent: 2,
            ..FormatConfig::default()
        };
        let (out, _) = run(input, &config);
        assert_eq!(out, "a    alpha beta\n       gamma delta\n");
    }

    #[test]
    fn decorator_end_to_end_fills_the_remaining_width() {
        let input = "\u{251c}\u{2500}\u{2500} src # Source\n";
        let config = FormatConfig {
            decorator: true,
            max_width: 40,
            ..FormatConfig::default()
        };
        let (out, _) = run(input, &config);
        // 40 - 7 (tree) - 6 (comment) - 3 = 24 filler chars
        let expected = format!("\u{251c}\u{2500}\u{2500} src {} Source\n", "-".repeat(24));
        assert_eq!(out, expected);
    }

    #[test]
    fn decorator_wrap_indents_continuations_past_the_separator() {
        let input = "a # alpha beta gamma delta\n";
        let config = FormatConfig {
            decorator: true,
            gap: 5,
            max_width: 17,
            wrap: true,
            ..FormatConfig::default()
        };
        let (out, _) = run(input, &config);
        // available = 17 - 1 - 10 - 3 = 3; continuation indent = 1 + 1 + 4
        assert_eq!(out, "a --- alpha beta\n      gamma delta\n");
    }

    #[test]
    fn degenerate_max_width_still_produces_a_decorator() {
        let input = "longtree # comment\n";
        let config = FormatConfig {
            decorator: true,
            max_width: 5,
            ..FormatConfig::default()
        };
        let (out, _) = run(input, &config);
        assert_eq!(out, "longtree - comment\n");
    }

    #[test]
    fn empty_comment_keeps_the_line_at_the_column() {
        let input = "a #\n";
        let config = FormatConfig {
            gap: 10,
            ..FormatConfig::default()
        };
        let (out, _) = run(input, &config);
        assert_eq!(out, format!("a{}\n", " ".repeat(9)));
    }

    #[test]
    fn empty_input_is_a_successful_empty_run() {
        let (out, stats) = run("", &FormatConfig::default());
        assert_eq!(out, "");
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.alignment_width, 30);
    }

    #[test]
    fn write_errors_abort_the_run() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = format_stream("a # x\n".as_bytes(), &mut FailingSink, &FormatConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
