//! Recursive font discovery over a resource graph
//!
//! A page's resource dictionary can reach further resource dictionaries
//! through form XObjects and tiling patterns, which carry their own
//! /Resources. The inspector walks that graph depth-first, in the order
//! Font, XObject, Pattern, and records each font identity the first time
//! it shows up.
//!
//! Entries that do not resolve to the expected kind are skipped without
//! noise; real-world files are full of them.

use lopdf::{Dictionary, Document};
use super::font::{FontEntry, UniqueFontSet};
use super::resolve::{category, get_dictionary, resolve_dictionary, resolve_stream, Resolved};

/// Walks resource dictionaries and feeds fonts into a shared [`UniqueFontSet`]
pub struct ResourceInspector<'a, 's> {
    doc: &'a Document,
    fonts: &'s mut UniqueFontSet,
    max_depth: Option<usize>,
    /// Resource dictionaries on the current recursion path
    path: Vec<&'a Dictionary>,
}

impl<'a, 's> ResourceInspector<'a, 's> {
    pub fn new(doc: &'a Document, fonts: &'s mut UniqueFontSet) -> Self {
        Self {
            doc,
            fonts,
            max_depth: None,
            path: Vec::new(),
        }
    }

    /// Stop descending below `max_depth` levels of nesting (the page's own
    /// resources are level 0)
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Inspect a resource dictionary on behalf of `page`
    ///
    /// Returns the fonts seen here for the first time in this document, in
    /// discovery order. `None` resources are a no-op.
    pub fn inspect(&mut self, resources: Option<&'a Dictionary>, page: u32) -> Vec<FontEntry> {
        let mut found = Vec::new();
        if let Some(resources) = resources {
            self.visit(resources, page, &mut found);
        }
        found
    }

    fn visit(&mut self, resources: &'a Dictionary, page: u32, found: &mut Vec<FontEntry>) {
        if self.path.iter().any(|ancestor| std::ptr::eq(*ancestor, resources)) {
            log::debug!("page {}: resource cycle at depth {}, not re-entering", page, self.path.len());
            return;
        }

        if let Some(max) = self.max_depth {
            if self.path.len() > max {
                log::debug!("page {}: resources nested deeper than {} levels skipped", page, max);
                return;
            }
        }

        self.path.push(resources);

        self.inspect_fonts(resources, page, found);
        self.descend(resources, b"XObject", page, found);
        self.descend(resources, b"Pattern", page, found);

        self.path.pop();
    }

    fn inspect_fonts(&mut self, resources: &'a Dictionary, page: u32, found: &mut Vec<FontEntry>) {
        let Some(fonts) = category(self.doc, resources, b"Font") else {
            return;
        };

        for (key, value) in fonts.iter() {
            let dict = match resolve_dictionary(self.doc, value) {
                Resolved::Value(dict) => dict,
                _ => {
                    log::trace!("page {}: font /{} is not a dictionary", page, String::from_utf8_lossy(key));
                    continue;
                }
            };

            let font = FontEntry::from_dictionary(self.doc, dict);
            if self.fonts.insert(&font) {
                log::debug!("page {}: new font {}", page, font.identity());
                found.push(font);
            }
        }
    }

    /// Recurse into the /Resources of every stream in a category
    fn descend(&mut self, resources: &'a Dictionary, category_name: &[u8], page: u32, found: &mut Vec<FontEntry>) {
        let Some(entries) = category(self.doc, resources, category_name) else {
            return;
        };

        for (key, value) in entries.iter() {
            let stream = match resolve_stream(self.doc, value) {
                Resolved::Value(stream) => stream,
                _ => {
                    log::trace!(
                        "page {}: {} /{} is not a stream",
                        page,
                        String::from_utf8_lossy(category_name),
                        String::from_utf8_lossy(key)
                    );
                    continue;
                }
            };

            if let Resolved::Value(nested) = get_dictionary(self.doc, &stream.dict, b"Resources") {
                self.visit(nested, page, found);
            }
        }
    }
}
