use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  # Format from stdin to stdout with default settings (aligned style)
  tree | tree-noter

  # Format from a file with a gap of 40 characters
  tree-noter tree-output.txt -g 40

  # Use decorator style with default separator (-----)
  tree-noter tree-output.txt -d

  # Use decorator style with custom separator
  tree-noter tree-output.txt -d -s \" === \"

  # Enable comment wrapping with max width
  tree-noter tree-output.txt -w -m 100

  # Save formatted output to a file
  tree-noter tree-output.txt -o formatted-tree.txt

Input format:
  Tree command output with trailing comments after the tree structure,
  each comment preceded by the comment marker (default: #).

  .
  \u{251c}\u{2500}\u{2500} src # Source code directory
  \u{2514}\u{2500}\u{2500} package.json # Project configuration";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tree-noter",
    version,
    about = "Format tree command output with aligned comments",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Input file containing tree output with comments (reads stdin if omitted)
    pub file: Option<PathBuf>,

    /// Output file (writes stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Use decorator style instead of aligned style
    #[arg(short = 'd', long = "decorator")]
    pub decorator: bool,

    /// Separator pattern for decorator style
    #[arg(short = 's', long = "separator", default_value = "-----")]
    pub separator: String,

    /// Minimum gap between tree content and comments
    #[arg(short = 'g', long = "gap", default_value_t = 30)]
    pub gap: usize,

    /// Comment marker to look for
    #[arg(short = 'c', long = "comment-marker", default_value = "#")]
    pub comment_marker: String,

    /// Enable wrapping of long comments
    #[arg(short = 'w', long = "wrap")]
    pub wrap: bool,

    /// Maximum output width including comments (auto-detects terminal width if omitted)
    #[arg(short = 'm', long = "max-width")]
    pub max_width: Option<usize>,

    /// Extra spaces to indent wrapped comment lines
    #[arg(short = 'i', long = "indent", default_value_t = 0)]
    pub indent: usize,

    /// Print a processing summary to stderr
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // An empty marker would match at position 0 of every line; an empty
        // separator would make the decorator vanish. Fall back to defaults.
        if self.comment_marker.is_empty() {
            self.comment_marker = "#".to_string();
        }
        if self.separator.is_empty() {
            self.separator = "-----".to_string();
        }
        self
    }
}
