//! Human-readable report output

use std::io::{self, Write};
use std::path::Path;
use crate::error::Error;
use crate::pdf::{DocumentReport, FontEntry, PageReport};

const TITLE: &str = "PDF Font Inspector";
const RULE: &str = "========================================";
const DIVIDER: &str = "----------------------------------------";

/// Write the banner printed once at startup
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", RULE)
}

/// Write the full report for one document
pub fn render<W: Write>(source: &Path, report: &DocumentReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Inspecting: {}", source.display())?;
    writeln!(out, "Pages: {}", report.page_count)?;
    writeln!(out, "{}", DIVIDER)?;

    for page in &report.pages {
        render_page(page, out)?;
    }

    writeln!(out, "{}", DIVIDER)?;
    writeln!(out, "Unique fonts found:")?;
    for font in &report.unique_fonts {
        writeln!(out, "- {}", font)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Done.")
}

/// Write the line for a document that could not be opened
pub fn render_fatal<W: Write>(error: &Error, out: &mut W) -> io::Result<()> {
    match error {
        Error::FileNotFound(path) => writeln!(out, "File not found: {}", path.display()),
        other => writeln!(out, "Fatal error reading PDF: {}", other),
    }
}

fn render_page<W: Write>(page: &PageReport, out: &mut W) -> io::Result<()> {
    for font in &page.fonts {
        writeln!(out, "{}", font_line(page.page, font))?;
    }

    match &page.outcome {
        Ok(Some(verdict)) if verdict.is_copyable() => {
            writeln!(out, "Page {} → Copyable text: YES ({} chars)", page.page, verdict.chars)
        }
        Ok(Some(_)) => writeln!(out, "Page {} → Copyable text: NO", page.page),
        Ok(None) => Ok(()),
        Err(e) => writeln!(out, "Page {} → Error processing page: {}", page.page, e),
    }
}

/// `Page <n> → Font: <name> | Type: <subtype> | Subset: <bool>`
pub fn font_line(page: u32, font: &FontEntry) -> String {
    format!(
        "Page {} → Font: {} | Type: {} | Subset: {}",
        page,
        font.base_font,
        font.subtype,
        font.is_subset()
    )
}
