use thiserror::Error;

/// Error type for the checked helpers around the diff engines. The diff
/// functions themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The requested paragraph lies beyond the end of the paragraph list
    #[error(
        "Paragraph index {index} is out of bounds: the text only has {paragraph_count} \
         paragraphs, so the largest valid index is {paragraph_count}"
    )]
    ParagraphIndexOutOfBounds {
        /// The index that was asked for
        index: usize,
        /// The number of paragraphs in the text
        paragraph_count: usize,
    },
}

#[cfg(feature = "wasm")]
impl From<DiffError> for wasm_bindgen::JsValue {
    fn from(error: DiffError) -> Self { wasm_bindgen::JsValue::from_str(&error.to_string()) }
}
