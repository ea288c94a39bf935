use core::ops::Range;

use crate::utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len};

/// The smallest contiguous region in which two sequences differ. Everything
/// before `start` is shared by both sequences, and so is everything from
/// `original_end` (in the original) and `modified_end` (in the modified
/// sequence) onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSpan {
    pub start: usize,
    pub original_end: usize,
    pub modified_end: usize,
}

impl DiffSpan {
    pub fn original_range(&self) -> Range<usize> { self.start..self.original_end }

    pub fn modified_range(&self) -> Range<usize> { self.start..self.modified_end }

    /// One past the last slot touched by the span on either side.
    pub fn end(&self) -> usize { self.original_end.max(self.modified_end) }
}

/// Trims the common prefix and then the common suffix of two sequences. The
/// suffix is only searched for after the prefix, so the two never overlap
/// even when one sequence is a repetition of the other.
///
/// ```not_rust
/// "0123456789", "0123abc789" -> DiffSpan { start: 4, original_end: 7, modified_end: 7 }
/// "aa", "aaaa"               -> DiffSpan { start: 2, original_end: 2, modified_end: 4 }
/// ```
pub fn trim_common_span<T>(original: &[T], modified: &[T]) -> DiffSpan
where
    T: PartialEq,
{
    let start = common_prefix_len(original, 0..original.len(), modified, 0..modified.len());
    let suffix = common_suffix_len(
        original,
        start..original.len(),
        modified,
        start..modified.len(),
    );

    DiffSpan {
        start,
        original_end: original.len() - suffix,
        modified_end: modified.len() - suffix,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn span_of(original: &str, modified: &str) -> DiffSpan {
        let original: Vec<char> = original.chars().collect();
        let modified: Vec<char> = modified.chars().collect();
        trim_common_span(&original, &modified)
    }

    #[test_case("", "", 0, 0, 0; "both empty")]
    #[test_case("abc", "abc", 3, 3, 3; "identical")]
    #[test_case("0123456789", "0123abc789", 4, 7, 7; "replacement in the middle")]
    #[test_case("aa", "aaaa", 2, 2, 4; "repetition extends the end")]
    #[test_case("abc", "", 0, 3, 0; "everything deleted")]
    #[test_case("", "abc", 0, 0, 3; "everything inserted")]
    #[test_case("abc", "xyz", 0, 3, 3; "disjoint")]
    #[test_case("abcabc", "abc", 3, 6, 3; "second copy removed")]
    fn test_trim_common_span(
        original: &str,
        modified: &str,
        start: usize,
        original_end: usize,
        modified_end: usize,
    ) {
        assert_eq!(
            span_of(original, modified),
            DiffSpan {
                start,
                original_end,
                modified_end
            }
        );
    }

    #[test]
    fn test_span_over_paragraphs() {
        let original = ["p1", "p2", "p3", "p4"];
        let modified = ["p1", "p2", "p0", "p0", "p3", "p4"];

        let span = trim_common_span(&original, &modified);

        assert_eq!(span.original_range(), 2..2);
        assert_eq!(span.modified_range(), 2..4);
        assert_eq!(span.end(), 4);
    }
}
