use paragraph_diff::{ParagraphDiff, TextDiff, diff_text};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// `ExampleDiff` is a paragraph diff test case: two versions of a text and the
/// entries `diff_paragraphs` is expected to report for them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleDiff {
    name: String,
    original: String,
    modified: String,
    expected: Vec<ExpectedParagraph>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct ExpectedParagraph {
    original: String,
    modified: String,
    original_index: Option<usize>,
    modified_index: Option<usize>,
    diff: Option<ExpectedTextDiff>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct ExpectedTextDiff {
    start_index: usize,
    original_diff_sequence: String,
    modified_diff_sequence: String,
}

impl ExampleDiff {
    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn modified(&self) -> &str { &self.modified }

    /// Asserts that the reported entries match the expected ones, in order.
    ///
    /// # Panics
    ///
    /// If any entry differs from the expected one.
    pub fn assert_eq(&self, result: &[ParagraphDiff]) {
        let expected: Vec<ParagraphDiff> = self.expected.iter().map(Into::into).collect();
        assert_eq!(result, expected.as_slice(), "{}", self.name);
    }

    /// Asserts that every entry's `diff` is what `diff_text` reports for its
    /// contents.
    ///
    /// # Panics
    ///
    /// If an entry's `diff` disagrees with `diff_text`.
    pub fn assert_consistent_text_diffs(&self, result: &[ParagraphDiff]) {
        for entry in result {
            assert_eq!(
                entry.diff(),
                diff_text(&entry.original(), &entry.modified()),
                "{}",
                self.name
            );
        }
    }
}

impl From<&ExpectedParagraph> for ParagraphDiff {
    fn from(expected: &ExpectedParagraph) -> Self {
        ParagraphDiff::new(
            expected.original.clone(),
            expected.modified.clone(),
            expected.original_index,
            expected.modified_index,
            expected.diff.as_ref().map(|diff| {
                TextDiff::new(
                    diff.start_index,
                    diff.original_diff_sequence.clone(),
                    diff.modified_diff_sequence.clone(),
                )
            }),
        )
    }
}
