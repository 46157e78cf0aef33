//! Error types for the PDF font inspector

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Document-level errors
///
/// These abort the inspection of a whole document. Anything that only
/// affects one page is a [`PageError`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error (the container could not be parsed)
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The catalog or its /Pages root cannot be resolved
    #[error("Document has no page tree")]
    MissingPageTree,
}

/// A failure isolated to a single page
///
/// The walker records it in the page's report and moves on to the next page.
#[derive(Error, Debug)]
pub enum PageError {
    /// The page object is missing or is not a dictionary
    #[error("page object {0:?} is not a dictionary")]
    MalformedPage(lopdf::ObjectId),

    /// A /Kids entry in the page tree is not an indirect reference
    #[error("page tree entry is not a reference to a page")]
    InvalidPageEntry,

    /// The page (or an ancestor in the page tree) has a /Resources entry
    /// that is dangling or is not a dictionary
    #[error("/Resources of page object {0:?} is not a dictionary")]
    MalformedResources(lopdf::ObjectId),

    /// Text extraction failed
    #[error("text extraction failed: {0}")]
    Text(#[from] lopdf::Error),
}
