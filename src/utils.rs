pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod paragraph_offset;
pub mod trim_common_span;
