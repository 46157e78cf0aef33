//! Page-by-page inspection of a whole document
//!
//! Every page gets its own [`PageReport`]. A page that fails keeps whatever
//! fonts were found before the failure and carries the error in its
//! outcome; the walk then moves on to the next page.

use std::collections::HashMap;
use std::path::Path;
use lopdf::{Document, ObjectId};
use crate::error::{Error, PageError, Result};
use super::font::{FontEntry, FontIdentity, UniqueFontSet};
use super::inspect::ResourceInspector;
use super::resolve::{page_resources, page_slots};

/// Options controlling a document inspection
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Extract each page's text and report whether it is copyable
    pub check_text: bool,
    /// Maximum nesting depth of XObject/Pattern resources to follow
    /// (`None` follows everything; cycles are always cut)
    pub max_depth: Option<usize>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            check_text: true,
            max_depth: None,
        }
    }
}

/// Source of a page's extractable text
pub trait TextSource {
    /// Plain text of the page object `page_id`, which sits at the 1-based
    /// position `page_number` in the page tree
    fn page_text(&self, doc: &Document, page_number: u32, page_id: ObjectId) -> std::result::Result<String, PageError>;
}

/// Text extraction through lopdf
///
/// `Document::extract_text` numbers pages by `get_pages`, which skips
/// broken page-tree entries, so the page object is mapped back to lopdf's
/// own number before extracting.
#[derive(Debug, Clone)]
pub struct LopdfText {
    numbers: HashMap<ObjectId, u32>,
}

impl LopdfText {
    pub fn new(doc: &Document) -> Self {
        let numbers = doc.get_pages().into_iter().map(|(number, id)| (id, number)).collect();
        Self { numbers }
    }
}

impl TextSource for LopdfText {
    fn page_text(&self, doc: &Document, page_number: u32, page_id: ObjectId) -> std::result::Result<String, PageError> {
        let lopdf_number = self
            .numbers
            .get(&page_id)
            .copied()
            .ok_or(PageError::MalformedPage(page_id))?;
        if lopdf_number != page_number {
            log::debug!("page {} is page {} for lopdf", page_number, lopdf_number);
        }

        let mut text = doc.extract_text(&[lopdf_number])?;
        // lopdf ends every extracted page with a line break of its own
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

impl<F> TextSource for F
where
    F: Fn(&Document, u32, ObjectId) -> std::result::Result<String, PageError>,
{
    fn page_text(&self, doc: &Document, page_number: u32, page_id: ObjectId) -> std::result::Result<String, PageError> {
        self(doc, page_number, page_id)
    }
}

/// Whether a page has text that can be copied out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextVerdict {
    /// Number of characters extracted (0 for whitespace-only text)
    pub chars: usize,
}

impl TextVerdict {
    /// Count the characters of a page's text
    ///
    /// Whitespace-only text counts as nothing. Otherwise every character
    /// counts, surrounding whitespace included.
    pub fn classify(text: &str) -> Self {
        let chars = if text.trim().is_empty() { 0 } else { text.chars().count() };
        Self { chars }
    }

    pub fn is_copyable(&self) -> bool {
        self.chars > 0
    }
}

/// Result of inspecting one page
#[derive(Debug)]
pub struct PageReport {
    /// 1-based page number
    pub page: u32,
    /// Fonts first seen on this page, in discovery order
    pub fonts: Vec<FontEntry>,
    /// Text verdict (`None` when text checking is off), or the page's error
    pub outcome: std::result::Result<Option<TextVerdict>, PageError>,
}

impl PageReport {
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Result of inspecting a whole document
#[derive(Debug)]
pub struct DocumentReport {
    pub page_count: usize,
    pub pages: Vec<PageReport>,
    /// Every distinct font identity, in first-seen order
    pub unique_fonts: Vec<FontIdentity>,
}

impl DocumentReport {
    /// Number of pages that could not be fully processed
    pub fn error_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_error()).count()
    }
}

/// Load a PDF for inspection
pub fn open_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    Ok(Document::load_mem(&bytes)?)
}

/// Open a PDF and inspect every page with lopdf text extraction
pub fn inspect_path(path: &Path, options: &InspectOptions) -> Result<DocumentReport> {
    let doc = open_document(path)?;
    walk(&doc, options)
}

/// Inspect every page of a loaded document
pub fn walk(doc: &Document, options: &InspectOptions) -> Result<DocumentReport> {
    walk_with(doc, options, &LopdfText::new(doc))
}

/// Inspect every page, taking page text from `text`
///
/// Fails only when the document has no page tree at all; anything wrong
/// with an individual page ends up in that page's report.
pub fn walk_with(doc: &Document, options: &InspectOptions, text: &dyn TextSource) -> Result<DocumentReport> {
    let mut fonts = UniqueFontSet::new();
    let slots = page_slots(doc)?;
    log::debug!("walking {} pages", slots.len());

    let page_count = slots.len();
    let reports = slots
        .into_iter()
        .zip(1u32..)
        .map(|(slot, number)| match slot {
            Ok(page_id) => inspect_page(doc, number, page_id, options, text, &mut fonts),
            Err(e) => {
                log::debug!("page {}: {}", number, e);
                PageReport {
                    page: number,
                    fonts: Vec::new(),
                    outcome: Err(e),
                }
            }
        })
        .collect();

    Ok(DocumentReport {
        page_count,
        pages: reports,
        unique_fonts: fonts.into_vec(),
    })
}

fn inspect_page(
    doc: &Document,
    number: u32,
    page_id: ObjectId,
    options: &InspectOptions,
    text: &dyn TextSource,
    fonts: &mut UniqueFontSet,
) -> PageReport {
    let mut report = PageReport {
        page: number,
        fonts: Vec::new(),
        outcome: Ok(None),
    };

    let resources = match page_resources(doc, page_id) {
        Ok(resources) => resources,
        Err(e) => {
            log::debug!("page {}: {}", number, e);
            report.outcome = Err(e);
            return report;
        }
    };

    report.fonts = ResourceInspector::new(doc, fonts)
        .with_max_depth(options.max_depth)
        .inspect(resources, number);

    if options.check_text {
        report.outcome = text
            .page_text(doc, number, page_id)
            .map(|t| Some(TextVerdict::classify(&t)));
        if let Err(e) = &report.outcome {
            log::debug!("page {}: {}", number, e);
        }
    }

    report
}
