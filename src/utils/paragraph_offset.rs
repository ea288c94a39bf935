use crate::errors::DiffError;

/// Returns the character offset at which the paragraph at `index` starts,
/// assuming the paragraphs were joined by a single `\n`. Passing
/// `paragraphs.len()` returns the offset just after a trailing separator,
/// i.e. the joined length plus one.
///
/// Lengths are counted in `char`s, matching the indices reported by
/// `diff_text`.
///
/// ```
/// use paragraph_diff::paragraph_offset;
///
/// let paragraphs = ["012345p1", "012345p2", "012345p3"];
/// assert_eq!(paragraph_offset(&paragraphs, 0), Ok(0));
/// assert_eq!(paragraph_offset(&paragraphs, 2), Ok(18));
/// assert!(paragraph_offset(&paragraphs, 4).is_err());
/// ```
///
/// # Errors
///
/// Returns `DiffError::ParagraphIndexOutOfBounds` if `index` is greater than
/// the number of paragraphs.
pub fn paragraph_offset(paragraphs: &[&str], index: usize) -> Result<usize, DiffError> {
    let preceding = paragraphs
        .get(..index)
        .ok_or(DiffError::ParagraphIndexOutOfBounds {
            index,
            paragraph_count: paragraphs.len(),
        })?;

    Ok(preceding
        .iter()
        .map(|paragraph| paragraph.chars().count() + 1)
        .sum())
}

/// Offsets of every paragraph, plus one trailing entry equal to
/// `paragraph_offset(paragraphs, paragraphs.len())`. Computing them in one
/// pass keeps the paragraph diff linear in the size of the texts.
pub fn paragraph_offsets(paragraphs: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(paragraphs.len() + 1);
    let mut offset = 0;
    offsets.push(offset);

    for paragraph in paragraphs {
        offset += paragraph.chars().count() + 1;
        offsets.push(offset);
    }

    offsets
}
