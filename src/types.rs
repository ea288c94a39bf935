pub mod paragraph_change;
pub mod paragraph_diff;
pub mod text_diff;
