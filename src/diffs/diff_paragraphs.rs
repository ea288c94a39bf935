use log::trace;

use crate::{
    diffs::diff_text::diff_text,
    tokenizer::paragraph_tokenizer::paragraph_tokenizer,
    types::paragraph_diff::ParagraphDiff,
    utils::{paragraph_offset::paragraph_offsets, trim_common_span::trim_common_span},
};

/// Compares two texts paragraph by paragraph, where paragraphs are separated
/// by `\n`. Returns an empty list if the texts are equal.
///
/// The first and last differing paragraphs are found by trimming the common
/// leading and trailing paragraphs. Every slot in between gets an entry with
/// its character-level diff. Slots that only exist on one side are reported
/// with an empty content and `None` index on the other side, so insertions
/// and deletions are full-sequence diffs.
///
/// The trailing paragraphs after the changed region have the same content on
/// both sides, but they move if the change altered the length of the text.
/// Those are reported with both offsets and a `None` diff, until the first
/// one that starts at the same offset in both texts: from there on the two
/// texts are identical, so nothing else has moved.
///
/// ```
/// use paragraph_diff::{ParagraphChange, diff_paragraphs};
///
/// let diffs = diff_paragraphs("p1\np2\np3", "p1\nnew\np2\np3");
///
/// let changes: Vec<_> = diffs.iter().map(|diff| diff.change()).collect();
/// assert_eq!(
///     changes,
///     [ParagraphChange::Inserted, ParagraphChange::Shifted, ParagraphChange::Shifted]
/// );
/// ```
#[must_use]
pub fn diff_paragraphs(original: &str, modified: &str) -> Vec<ParagraphDiff> {
    if original == modified {
        return Vec::new();
    }

    let original_paragraphs = paragraph_tokenizer(original);
    let modified_paragraphs = paragraph_tokenizer(modified);
    let original_offsets = paragraph_offsets(&original_paragraphs);
    let modified_offsets = paragraph_offsets(&modified_paragraphs);

    let span = trim_common_span(&original_paragraphs, &modified_paragraphs);
    trace!(
        "Paragraphs {:?} of the original text differ from paragraphs {:?} of the modified text",
        span.original_range(),
        span.modified_range()
    );

    let mut result: Vec<ParagraphDiff> = (span.start..span.end())
        .map(|slot| {
            let (original, original_index) = if slot < span.original_end {
                (original_paragraphs[slot], Some(original_offsets[slot]))
            } else {
                ("", None)
            };
            let (modified, modified_index) = if slot < span.modified_end {
                (modified_paragraphs[slot], Some(modified_offsets[slot]))
            } else {
                ("", None)
            };

            ParagraphDiff::new(
                original.to_owned(),
                modified.to_owned(),
                original_index,
                modified_index,
                diff_text(original, modified),
            )
        })
        .collect();

    let changed_count = result.len();

    let original_tail = original_paragraphs
        .iter()
        .zip(&original_offsets)
        .skip(span.original_end);
    let modified_tail = modified_paragraphs
        .iter()
        .zip(&modified_offsets)
        .skip(span.modified_end);

    result.extend(
        original_tail
            .zip(modified_tail)
            .take_while(|((_, original_index), (_, modified_index))| {
                original_index != modified_index
            })
            .map(|((original, original_index), (modified, modified_index))| {
                debug_assert_eq!(
                    original, modified,
                    "Paragraphs after the changed region must be shared by both texts"
                );

                ParagraphDiff::new(
                    (*original).to_owned(),
                    (*modified).to_owned(),
                    Some(*original_index),
                    Some(*modified_index),
                    None,
                )
            }),
    );

    let shifted_count = result.len() - changed_count;
    let original_stop = span.original_end + shifted_count;
    let modified_stop = span.modified_end + shifted_count;
    if original_stop < original_paragraphs.len() && modified_stop < modified_paragraphs.len() {
        trace!(
            "Offsets meet at {} (original paragraph {original_stop}, modified paragraph \
             {modified_stop}), the rest of the texts is unaffected",
            original_offsets[original_stop]
        );
    } else {
        trace!(
            "Shifted paragraphs run until the end of the text (original paragraph \
             {original_stop}, modified paragraph {modified_stop})"
        );
    }
    trace!("Found {changed_count} changed and {shifted_count} shifted paragraphs");

    result
}
