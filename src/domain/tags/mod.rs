//! Tag system

pub mod counter;
pub mod parser;

// Re-export main types
pub use counter::{count_tags, TagCount};
pub use parser::{split_tags, tags_from_value};
