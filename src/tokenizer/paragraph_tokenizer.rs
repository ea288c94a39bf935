/// Splits text into paragraphs on `\n`. The separators are dropped, and `\r`
/// is kept as part of the paragraph content. A text with `n` separators always
/// yields `n + 1` paragraphs, so the empty text is a single empty paragraph.
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1\r", "Line 2"]
/// "" -> [""]
/// ```
pub fn paragraph_tokenizer(text: &str) -> Vec<&str> { text.split('\n').collect() }
