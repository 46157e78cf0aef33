//! PDF Font Inspector Library
//!
//! Reports, page by page, which fonts a PDF references and whether the page
//! has copyable text. Fonts are found by walking each page's resource
//! dictionary, including the resources of nested form XObjects and tiling
//! patterns, and each distinct font is reported once per document.
//!
//! # Example
//!
//! ```no_run
//! use pdf_font_inspector::pdf::{inspect_path, InspectOptions};
//! use pdf_font_inspector::report::render;
//! use std::path::Path;
//!
//! let path = Path::new("handout.pdf");
//! let report = inspect_path(path, &InspectOptions::default()).expect("Failed to inspect PDF");
//! render(path, &report, &mut std::io::stdout()).expect("Failed to write report");
//! ```

pub mod error;
pub mod pdf;
pub mod report;

#[cfg(test)]
mod fixtures;

// Re-export commonly used items
pub use error::{Error, PageError, Result};
