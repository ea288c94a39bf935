use core::ops::Range;

/// Counts how many elements at the start of `original_range` and
/// `modified_range` are pairwise equal. The count never exceeds the length of
/// the shorter range.
pub fn common_prefix_len<T>(
    original: &[T],
    original_range: Range<usize>,
    modified: &[T],
    modified_range: Range<usize>,
) -> usize
where
    T: PartialEq,
{
    original[original_range]
        .iter()
        .zip(&modified[modified_range])
        .take_while(|(left, right)| left == right)
        .count()
}
