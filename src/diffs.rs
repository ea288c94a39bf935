pub mod diff_paragraphs;
pub mod diff_text;
