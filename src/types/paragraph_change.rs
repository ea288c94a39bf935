use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// What happened to the paragraph(s) of a single `ParagraphDiff` slot.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphChange {
    /// Only the modified text has a paragraph in this slot.
    Inserted,
    /// Only the original text has a paragraph in this slot.
    Deleted,
    /// Both texts have a paragraph here and their contents differ.
    Modified,
    /// The content is the same but it starts at a different offset.
    Shifted,
    /// Same content at the same offset. Only possible for a slot enclosed
    /// by changed paragraphs.
    Unchanged,
}

impl Display for ParagraphChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParagraphChange::Inserted => write!(f, "Inserted"),
            ParagraphChange::Deleted => write!(f, "Deleted"),
            ParagraphChange::Modified => write!(f, "Modified"),
            ParagraphChange::Shifted => write!(f, "Shifted"),
            ParagraphChange::Unchanged => write!(f, "Unchanged"),
        }
    }
}
