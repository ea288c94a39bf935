use std::{fmt::Display, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// The single contiguous region in which two texts differ.
///
/// `start_index` is a (UTF-8) character index which is valid in both texts,
/// since everything before it is shared. The diff sequences are the
/// characters of each text from `start_index` up to the common suffix. At
/// most one of them is empty.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff {
    start_index: usize,
    original_diff_sequence: String,
    modified_diff_sequence: String,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl TextDiff {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(
        start_index: usize,
        original_diff_sequence: String,
        modified_diff_sequence: String,
    ) -> Self {
        Self {
            start_index,
            original_diff_sequence,
            modified_diff_sequence,
        }
    }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = startIndex))]
    #[must_use]
    pub fn start_index(&self) -> usize { self.start_index }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = originalDiffSequence))]
    #[must_use]
    pub fn original_diff_sequence(&self) -> String { self.original_diff_sequence.clone() }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = modifiedDiffSequence))]
    #[must_use]
    pub fn modified_diff_sequence(&self) -> String { self.modified_diff_sequence.clone() }
}

impl TextDiff {
    /// Character range of the differing region within the original text.
    #[must_use]
    pub fn original_range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.original_diff_sequence.chars().count()
    }

    /// Character range of the differing region within the modified text.
    #[must_use]
    pub fn modified_range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.modified_diff_sequence.chars().count()
    }
}

impl Display for TextDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "@{} {:?} -> {:?}",
            self.start_index, self.original_diff_sequence, self.modified_diff_sequence
        )
    }
}
