#![forbid(unsafe_code)]
mod cli;
mod layout;
mod render;
mod split;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use render::{format_stream, FormatConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("tree-noter: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    let config = FormatConfig {
        comment_marker: args.comment_marker.clone(),
        gap: args.gap,
        max_width: terminal::resolve_max_width(args.max_width),
        decorator: args.decorator,
        separator: args.separator.clone(),
        wrap: args.wrap,
        indent: args.indent,
    };

    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("{}: failed to open input file", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("{}: failed to create output file", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let stats = format_stream(reader, &mut writer, &config)
        .context("failed to format tree output")?;
    writer.flush().context("failed to flush output")?;

    if args.verbose > 0 && !args.quiet {
        eprintln!(
            "tree-noter: formatted {} lines ({} style, alignment width {}, max width {})",
            stats.lines,
            if config.decorator { "decorator" } else { "aligned" },
            stats.alignment_width,
            config.max_width,
        );
    }

    Ok(())
}
