use crate::{
    tokenizer::character_tokenizer::character_tokenizer, types::text_diff::TextDiff,
    utils::trim_common_span::trim_common_span,
};

/// Finds the single contiguous region in which `original` and `modified`
/// differ by trimming their common prefix and then their common suffix.
/// Returns `None` if the texts are equal.
///
/// Indices are counted in `char`s. The suffix is never allowed to overlap the
/// prefix, so inserting a repeated character reports the insertion after the
/// existing run.
///
/// ```
/// use paragraph_diff::{TextDiff, diff_text};
///
/// assert_eq!(
///     diff_text("0123456789", "0123abc789"),
///     Some(TextDiff::new(4, "456".to_owned(), "abc".to_owned()))
/// );
/// assert_eq!(diff_text("", ""), None);
/// ```
#[must_use]
pub fn diff_text(original: &str, modified: &str) -> Option<TextDiff> {
    if original == modified {
        return None;
    }

    let original_chars = character_tokenizer(original);
    let modified_chars = character_tokenizer(modified);
    let span = trim_common_span(&original_chars, &modified_chars);

    debug_assert!(
        !span.original_range().is_empty() || !span.modified_range().is_empty(),
        "Different texts must have a non-empty difference"
    );

    Some(TextDiff::new(
        span.start,
        original_chars[span.original_range()].iter().collect(),
        modified_chars[span.modified_range()].iter().collect(),
    ))
}
