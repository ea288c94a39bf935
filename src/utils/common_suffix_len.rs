use core::ops::Range;

/// Counts how many elements at the end of `original_range` and
/// `modified_range` are pairwise equal. The count never exceeds the length of
/// the shorter range, so restricting both ranges to what follows a common
/// prefix keeps the prefix and the suffix from overlapping.
pub fn common_suffix_len<T>(
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
        .rev()
        .zip(modified[modified_range].iter().rev())
        .take_while(|(left, right)| left == right)
        .count()
}
