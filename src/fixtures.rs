//! In-memory PDF construction for unit tests

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

pub fn new_doc() -> Document {
    Document::with_version("1.5")
}

pub fn name(s: &str) -> Object {
    Object::Name(s.as_bytes().to_vec())
}

/// A font dictionary with the given /BaseFont and /Subtype
pub fn font_dict(base_font: &str, subtype: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", name("Font"));
    dict.set("Subtype", name(subtype));
    dict.set("BaseFont", name(base_font));
    dict
}

/// A resource dictionary with a single category filled from `entries`
pub fn category_resources(category: &str, entries: Vec<(&str, Object)>) -> Dictionary {
    let mut resources = Dictionary::new();
    resources.set(category, Object::Dictionary(entries_dict(entries)));
    resources
}

/// A dictionary mapping each local name to its object
pub fn entries_dict(entries: Vec<(&str, Object)>) -> Dictionary {
    let mut dict = Dictionary::new();
    for (key, value) in entries {
        dict.set(key, value);
    }
    dict
}

/// Builds a document with a flat page tree
pub struct PdfBuilder {
    pub doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    tree_resources: Option<Dictionary>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        let mut doc = new_doc();
        let pages_id = doc.new_object_id();
        Self { doc, pages_id, kids: Vec::new(), tree_resources: None }
    }

    /// Resources placed on the /Pages node, inherited by pages without their own
    pub fn set_tree_resources(&mut self, resources: Dictionary) {
        self.tree_resources = Some(resources);
    }

    pub fn add_font(&mut self, base_font: &str, subtype: &str) -> ObjectId {
        self.doc.add_object(font_dict(base_font, subtype))
    }

    /// A form XObject carrying its own resources
    pub fn add_form_xobject(&mut self, resources: Option<Dictionary>) -> ObjectId {
        let mut dict = Dictionary::new();
        dict.set("Type", name("XObject"));
        dict.set("Subtype", name("Form"));
        dict.set("BBox", Object::Array(vec![Object::Integer(0), Object::Integer(0), Object::Integer(100), Object::Integer(100)]));
        if let Some(resources) = resources {
            dict.set("Resources", Object::Dictionary(resources));
        }
        self.doc.add_object(Stream::new(dict, b"q Q".to_vec()))
    }

    /// A tiling pattern carrying its own resources
    pub fn add_tiling_pattern(&mut self, resources: Option<Dictionary>) -> ObjectId {
        let mut dict = Dictionary::new();
        dict.set("Type", name("Pattern"));
        dict.set("PatternType", Object::Integer(1));
        dict.set("PaintType", Object::Integer(1));
        dict.set("TilingType", Object::Integer(1));
        dict.set("BBox", Object::Array(vec![Object::Integer(0), Object::Integer(0), Object::Integer(10), Object::Integer(10)]));
        dict.set("XStep", Object::Integer(10));
        dict.set("YStep", Object::Integer(10));
        if let Some(resources) = resources {
            dict.set("Resources", Object::Dictionary(resources));
        }
        self.doc.add_object(Stream::new(dict, b"q Q".to_vec()))
    }

    /// Append a page whose /Resources entry is `resources` (omitted when `None`)
    pub fn add_page(&mut self, resources: Option<Object>) -> ObjectId {
        let mut page = Dictionary::new();
        page.set("Type", name("Page"));
        page.set("Parent", Object::Reference(self.pages_id));
        page.set("MediaBox", Object::Array(vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)]));
        if let Some(resources) = resources {
            page.set("Resources", resources);
        }
        let id = self.doc.add_object(page);
        self.kids.push(Object::Reference(id));
        id
    }

    /// Append an arbitrary /Kids entry, such as a dangling reference
    pub fn add_raw_kid(&mut self, kid: Object) {
        self.kids.push(kid);
    }

    pub fn finish(mut self) -> Document {
        let mut pages = Dictionary::new();
        pages.set("Type", name("Pages"));
        pages.set("Count", Object::Integer(self.kids.len() as i64));
        pages.set("Kids", Object::Array(self.kids));
        if let Some(resources) = self.tree_resources {
            pages.set("Resources", Object::Dictionary(resources));
        }
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", name("Catalog"));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        self.doc
    }
}
