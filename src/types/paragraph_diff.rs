use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::types::{paragraph_change::ParagraphChange, text_diff::TextDiff};

/// One row of a paragraph-level diff report.
///
/// `original` and `modified` hold the paragraph content of the slot on each
/// side, or an empty string if that side has no paragraph there, in which
/// case the matching index is `None`. Indices are character offsets of the
/// paragraph's first character within the full text.
///
/// `diff` is the character-level difference of the two contents, and `None`
/// when they are equal. Entries with equal content are reported when their
/// offset has shifted because of an earlier change.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphDiff {
    original: String,
    modified: String,

    original_index: Option<usize>,
    modified_index: Option<usize>,

    diff: Option<TextDiff>,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl ParagraphDiff {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(
        original: String,
        modified: String,
        original_index: Option<usize>,
        modified_index: Option<usize>,
        diff: Option<TextDiff>,
    ) -> Self {
        debug_assert!(
            original_index.is_some() || original.is_empty(),
            "A paragraph without an original counterpart can't have original content"
        );
        debug_assert!(
            modified_index.is_some() || modified.is_empty(),
            "A paragraph without a modified counterpart can't have modified content"
        );

        Self {
            original,
            modified,
            original_index,
            modified_index,
            diff,
        }
    }

    #[must_use]
    pub fn original(&self) -> String { self.original.clone() }

    #[must_use]
    pub fn modified(&self) -> String { self.modified.clone() }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = originalIndex))]
    #[must_use]
    pub fn original_index(&self) -> Option<usize> { self.original_index }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = modifiedIndex))]
    #[must_use]
    pub fn modified_index(&self) -> Option<usize> { self.modified_index }

    #[must_use]
    pub fn diff(&self) -> Option<TextDiff> { self.diff.clone() }

    /// Classifies the slot. A missing side wins over content comparison, so
    /// an inserted empty paragraph is `Inserted` even though its `diff` is
    /// `None`.
    #[must_use]
    pub fn change(&self) -> ParagraphChange {
        match (self.original_index, self.modified_index) {
            (None, _) => ParagraphChange::Inserted,
            (_, None) => ParagraphChange::Deleted,
            _ if self.diff.is_some() => ParagraphChange::Modified,
            (original, modified) if original != modified => ParagraphChange::Shifted,
            _ => ParagraphChange::Unchanged,
        }
    }
}

impl Display for ParagraphDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let index = |index: Option<usize>| index.map_or_else(|| "-".to_owned(), |i| i.to_string());

        write!(
            f,
            "[{} -> {}] {} {:?} -> {:?}",
            index(self.original_index),
            index(self.modified_index),
            self.change(),
            self.original,
            self.modified
        )
    }
}
