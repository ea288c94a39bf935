//! Expose the `paragraph_diff` crate's functionality to WebAssembly.
//!
//! Indices are character indices, the same as in the Rust API. JavaScript
//! strings are indexed by UTF-16 code units, so callers working with text
//! outside the Basic Multilingual Plane have to convert them.

use wasm_bindgen::prelude::*;

use crate::{
    DiffError, ParagraphDiff, TextDiff, tokenizer::paragraph_tokenizer::paragraph_tokenizer,
};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff_text`. Returns `undefined` for equal
/// texts.
#[wasm_bindgen(js_name = diffText)]
#[must_use]
pub fn diff_text(original: &str, modified: &str) -> Option<TextDiff> {
    set_panic_hook();

    crate::diff_text(original, modified)
}

/// WASM wrapper around `crate::diff_paragraphs`.
#[wasm_bindgen(js_name = diffParagraphs)]
#[must_use]
pub fn diff_paragraphs(original: &str, modified: &str) -> Vec<ParagraphDiff> {
    set_panic_hook();

    crate::diff_paragraphs(original, modified)
}

/// Character offset of the paragraph at `index` within `text`.
///
/// # Errors
///
/// Throws if `index` is greater than the number of paragraphs in `text`.
#[wasm_bindgen(js_name = paragraphOffset)]
pub fn paragraph_offset(text: &str, index: usize) -> Result<usize, DiffError> {
    set_panic_hook();

    crate::paragraph_offset(&paragraph_tokenizer(text), index)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
