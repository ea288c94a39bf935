/// Splits text into Unicode scalar values, the unit every index of this crate
/// is expressed in.
///
/// ```not_rust
/// "Hey!" -> ['H', 'e', 'y', '!']
/// ```
pub fn character_tokenizer(text: &str) -> Vec<char> { text.chars().collect() }
