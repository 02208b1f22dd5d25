use assert_cmd::Command;

/// Command handle for the tree-noter binary under test.
pub fn tree_noter() -> Command {
    Command::cargo_bin("tree-noter").unwrap()
}

/// A small tree listing with comments, as `tree` would print it.
#[allow(dead_code)]
pub const SAMPLE_TREE: &str = "\
.\n\
\u{251c}\u{2500}\u{2500} src # Source\n\
\u{2514}\u{2500}\u{2500} pkg.json # Config\n";
