//! PDF resource inspection module

pub mod font;
pub mod inspect;
pub mod resolve;
pub mod walk;

// Re-export commonly used items
pub use font::{FontEntry, FontIdentity, UniqueFontSet, UNKNOWN};
pub use inspect::ResourceInspector;
pub use resolve::{page_resources, page_slots, PageSlot, Resolved};
pub use walk::{
    inspect_path, open_document, walk, walk_with,
    DocumentReport, InspectOptions, LopdfText, PageReport, TextSource, TextVerdict,
};
