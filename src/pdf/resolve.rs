//! Typed object resolution on top of lopdf
//!
//! lopdf hands back `Object` values that may be indirect references, and
//! whose kind has to be checked at every use. The helpers here follow one
//! level of indirection and report the outcome as a [`Resolved`] value, so
//! callers can tell a missing entry from one of the wrong kind.

use std::collections::HashSet;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use crate::error::{Error, PageError, Result};

/// Outcome of resolving a PDF object as a particular kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<T> {
    /// The key is absent, or the reference points at nothing
    NotFound,
    /// The object exists but has a different kind
    WrongType,
    /// The object resolved to the requested kind
    Value(T),
}

impl<T> Resolved<T> {
    /// Keep the value, dropping the reason for a miss
    pub fn ok(self) -> Option<T> {
        match self {
            Resolved::Value(v) => Some(v),
            _ => None,
        }
    }

    fn and_then<U>(self, f: impl FnOnce(T) -> Resolved<U>) -> Resolved<U> {
        match self {
            Resolved::NotFound => Resolved::NotFound,
            Resolved::WrongType => Resolved::WrongType,
            Resolved::Value(v) => f(v),
        }
    }
}

/// Follow a reference (if any) to the object it names
pub fn resolve_object<'a>(doc: &'a Document, obj: &'a Object) -> Resolved<&'a Object> {
    match obj {
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Null) | Err(_) => Resolved::NotFound,
            Ok(target) => Resolved::Value(target),
        },
        Object::Null => Resolved::NotFound,
        other => Resolved::Value(other),
    }
}

/// Resolve an object as a plain dictionary (streams are not accepted)
pub fn resolve_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Resolved<&'a Dictionary> {
    resolve_object(doc, obj).and_then(|o| match o {
        Object::Dictionary(dict) => Resolved::Value(dict),
        _ => Resolved::WrongType,
    })
}

/// Resolve an object as a stream
pub fn resolve_stream<'a>(doc: &'a Document, obj: &'a Object) -> Resolved<&'a Stream> {
    resolve_object(doc, obj).and_then(|o| match o {
        Object::Stream(stream) => Resolved::Value(stream),
        _ => Resolved::WrongType,
    })
}

/// Look up `key` in `dict` and resolve it as a dictionary
pub fn get_dictionary<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Resolved<&'a Dictionary> {
    match dict.get(key) {
        Ok(obj) => resolve_dictionary(doc, obj),
        Err(_) => Resolved::NotFound,
    }
}

/// Look up `key` in `dict` and resolve it as a name, without the leading `/`
pub fn get_name(doc: &Document, dict: &Dictionary, key: &[u8]) -> Resolved<String> {
    let obj = match dict.get(key) {
        Ok(obj) => obj,
        Err(_) => return Resolved::NotFound,
    };

    resolve_object(doc, obj).and_then(|o| match o {
        Object::Name(name) => Resolved::Value(String::from_utf8_lossy(name).into_owned()),
        _ => Resolved::WrongType,
    })
}

/// A resource category sub-dictionary such as `/Font` or `/XObject`
///
/// A category that is present but not a dictionary is treated like a
/// missing one.
pub fn category<'a>(doc: &'a Document, resources: &'a Dictionary, name: &[u8]) -> Option<&'a Dictionary> {
    get_dictionary(doc, resources, name).ok()
}

/// A leaf of the page tree: the page object, or why it cannot be used
pub type PageSlot = std::result::Result<ObjectId, PageError>;

/// Enumerate the page tree in document order, one slot per page
///
/// Unlike `Document::get_pages`, a /Kids entry that is dangling or not a
/// dictionary still takes up a slot, so the pages after it keep their
/// 1-based numbers. Fails only when the catalog has no usable /Pages root.
pub fn page_slots(doc: &Document) -> Result<Vec<PageSlot>> {
    let catalog = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| resolve_dictionary(doc, root).ok())
        .ok_or(Error::MissingPageTree)?;
    let root_obj = catalog.get(b"Pages").map_err(|_| Error::MissingPageTree)?;
    let root = resolve_dictionary(doc, root_obj).ok().ok_or(Error::MissingPageTree)?;

    let root_id = match root_obj {
        Object::Reference(id) => Some(*id),
        _ => None,
    };

    let mut slots = Vec::new();
    let mut visited = HashSet::new();
    collect_kids(doc, root_id, root, &mut visited, &mut slots);
    Ok(slots)
}

fn collect_kids(
    doc: &Document,
    node_id: Option<ObjectId>,
    node: &Dictionary,
    visited: &mut HashSet<ObjectId>,
    slots: &mut Vec<PageSlot>,
) {
    if let Some(id) = node_id {
        if !visited.insert(id) {
            log::debug!("page tree node {:?} reached twice, skipped", id);
            return;
        }
    }

    let kids = match node.get(b"Kids").map(|kids| resolve_object(doc, kids)) {
        Ok(Resolved::Value(Object::Array(kids))) => kids,
        _ => {
            log::debug!("page tree node {:?} has no /Kids array", node_id);
            return;
        }
    };

    for kid in kids {
        let id = match kid {
            Object::Reference(id) => *id,
            _ => {
                slots.push(Err(PageError::InvalidPageEntry));
                continue;
            }
        };

        match doc.get_object(id) {
            Ok(Object::Dictionary(dict)) if is_tree_node(doc, dict) => {
                collect_kids(doc, Some(id), dict, visited, slots)
            }
            Ok(Object::Dictionary(_)) => slots.push(Ok(id)),
            _ => slots.push(Err(PageError::MalformedPage(id))),
        }
    }
}

/// An intermediate /Pages node rather than a leaf /Page
fn is_tree_node(doc: &Document, dict: &Dictionary) -> bool {
    match get_name(doc, dict, b"Type") {
        Resolved::Value(kind) => kind == "Pages",
        _ => dict.has(b"Kids"),
    }
}

/// Find the resource dictionary that applies to a page
///
/// /Resources is inheritable, so when the page has none the nearest
/// ancestor in the page tree supplies it. Returns `Ok(None)` when no node
/// on the chain carries the entry.
pub fn page_resources(doc: &Document, page_id: ObjectId) -> std::result::Result<Option<&Dictionary>, PageError> {
    let page = match doc.get_object(page_id) {
        Ok(Object::Dictionary(dict)) => dict,
        _ => return Err(PageError::MalformedPage(page_id)),
    };

    let mut node_id = page_id;
    let mut node = page;
    let mut seen = HashSet::new();
    seen.insert(page_id);

    loop {
        if let Ok(obj) = node.get(b"Resources") {
            return match resolve_dictionary(doc, obj) {
                Resolved::Value(dict) => Ok(Some(dict)),
                _ => Err(PageError::MalformedResources(node_id)),
            };
        }

        let parent_id = match node.get(b"Parent") {
            Ok(Object::Reference(id)) => *id,
            _ => return Ok(None),
        };

        // A parent loop in the page tree just ends the search
        if !seen.insert(parent_id) {
            return Ok(None);
        }

        match doc.get_object(parent_id) {
            Ok(Object::Dictionary(dict)) => {
                node_id = parent_id;
                node = dict;
            }
            _ => return Ok(None),
        }
    }
}
