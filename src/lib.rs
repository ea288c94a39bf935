//! Minimal differences between two versions of a text.
//!
//! [`diff_text`] trims the common prefix and suffix of two strings and
//! reports the single region in between. [`diff_paragraphs`] does the same
//! over `\n`-separated paragraphs, then reports a character-level diff for
//! each paragraph in the changed region, followed by the unchanged paragraphs
//! whose offset moved because of it.
//!
//! All indices are counted in `char`s.
//!
//! ```
//! use paragraph_diff::{diff_paragraphs, diff_text};
//!
//! let diff = diff_text("0123456789", "0123abc789").unwrap();
//! assert_eq!(diff.start_index(), 4);
//! assert_eq!(diff.original_diff_sequence(), "456");
//! assert_eq!(diff.modified_diff_sequence(), "abc");
//!
//! assert!(diff_paragraphs("a\nb\nc", "a\nb\nc").is_empty());
//! ```

mod diffs;
mod errors;
mod tokenizer;
mod types;
mod utils;

pub use diffs::{diff_paragraphs::diff_paragraphs, diff_text::diff_text};
pub use errors::DiffError;
pub use types::{
    paragraph_change::ParagraphChange, paragraph_diff::ParagraphDiff, text_diff::TextDiff,
};
pub use utils::paragraph_offset::paragraph_offset;

#[cfg(feature = "wasm")]
pub mod wasm;
