//! Font entries and document-wide font deduplication

use std::fmt;
use indexmap::IndexSet;
use lopdf::{Dictionary, Document};
use super::resolve::get_name;

/// Placeholder for a /BaseFont or /Subtype that is missing or not a name
pub const UNKNOWN: &str = "(unknown)";

/// A font found in a resource dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    /// PostScript name, possibly with a subset tag such as `ABCDEF+`
    pub base_font: String,
    /// Font subtype (Type1, TrueType, Type0, ...)
    pub subtype: String,
}

impl FontEntry {
    pub fn new(base_font: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            base_font: base_font.into(),
            subtype: subtype.into(),
        }
    }

    /// Read /BaseFont and /Subtype from a font dictionary
    ///
    /// Either field falls back to [`UNKNOWN`] rather than failing.
    pub fn from_dictionary(doc: &Document, dict: &Dictionary) -> Self {
        let base_font = get_name(doc, dict, b"BaseFont").ok().unwrap_or_else(|| UNKNOWN.to_string());
        let subtype = get_name(doc, dict, b"Subtype").ok().unwrap_or_else(|| UNKNOWN.to_string());
        Self { base_font, subtype }
    }

    /// Whether the font looks subsetted
    ///
    /// This only checks for a `+` in the name, so it is a heuristic.
    pub fn is_subset(&self) -> bool {
        self.base_font.contains('+')
    }

    /// The key used to deduplicate fonts across the document
    pub fn identity(&self) -> FontIdentity {
        FontIdentity(format!("{} | {}", self.base_font, self.subtype))
    }
}

/// Deduplication key for a font: base name plus subtype
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontIdentity(String);

impl FontIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every font identity seen so far in one document, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct UniqueFontSet {
    fonts: IndexSet<FontIdentity>,
}

impl UniqueFontSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a font, returning `true` only the first time its identity is seen
    pub fn insert(&mut self, font: &FontEntry) -> bool {
        self.fonts.insert(font.identity())
    }

    pub fn contains(&self, font: &FontEntry) -> bool {
        self.fonts.contains(&font.identity())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontIdentity> {
        self.fonts.iter()
    }

    pub fn into_vec(self) -> Vec<FontIdentity> {
        self.fonts.into_iter().collect()
    }
}
