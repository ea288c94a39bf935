pub mod character_tokenizer;
pub mod paragraph_tokenizer;
