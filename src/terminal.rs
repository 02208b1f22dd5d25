//! Terminal probing: resolving the effective maximum output width.

use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io;

/// Width used when no flag is given and no terminal can be probed.
pub const DEFAULT_WIDTH: usize = 80;

/// Resolve the effective max width: an explicit flag wins; otherwise the
/// terminal's column count when stdout is a TTY; otherwise 80. Piped output
/// therefore always gets the fixed fallback.
pub fn resolve_max_width(explicit: Option<usize>) -> usize {
    explicit.unwrap_or_else(detected_width)
}

fn detected_width() -> usize {
    if io::stdout().is_tty() {
        terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH)
    } else {
        DEFAULT_WIDTH
    }
}
