//! PDF Font Inspector CLI tool
//!
//! Lists the fonts used on each page of one or more PDFs and whether the
//! pages carry copyable text.

use anyhow::{bail, Context, Result};
use clap::Parser;
use glob::glob;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use pdf_font_inspector::pdf::{inspect_path, InspectOptions};
use pdf_font_inspector::report::{render, render_banner, render_fatal};

/// PDF Font Inspector - Report fonts and copyable text per page
#[derive(Parser)]
#[command(name = "pdf-font-inspector")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Inspect a single PDF
    pdf-font-inspector handout.pdf

    # Inspect every PDF in a folder, fonts only
    pdf-font-inspector --no-text \"slides/*.pdf\"

    # Show traversal details on stderr
    RUST_LOG=debug pdf-font-inspector handout.pdf")]
struct Cli {
    /// PDF files to inspect. Supports glob patterns like "*.pdf"
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Skip text extraction and only report fonts
    #[arg(long)]
    no_text: bool,

    /// Maximum XObject/Pattern nesting depth to follow
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Inspect every input, returning `false` if any of them could not be read
fn run(cli: Cli) -> Result<bool> {
    let options = InspectOptions {
        check_text: !cli.no_text,
        max_depth: cli.max_depth,
    };
    let inputs = expand_globs(cli.inputs)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_banner(&mut out)?;

    let mut all_ok = true;
    for path in &inputs {
        match inspect_path(path, &options) {
            Ok(report) => {
                if report.error_count() > 0 {
                    log::info!("{}: {} page(s) had errors", path.display(), report.error_count());
                }
                render(path, &report, &mut out)
                    .with_context(|| format!("writing report for {}", path.display()))?;
            }
            Err(e) => {
                all_ok = false;
                render_fatal(&e, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}

/// Expand glob patterns in input paths
fn expand_globs(patterns: Vec<String>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = false;
            let entries = glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => log::warn!("glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                bail!("No PDF files found matching pattern: {}", pattern);
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    paths.sort();

    Ok(paths)
}
