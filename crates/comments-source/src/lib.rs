//! NDJSON comment loading.
//!
//! Reads a newline-delimited JSON file and extracts one content string per
//! parseable line. Lines that are not valid JSON are dropped.

mod error;
mod loader;

pub use error::CommentSourceError;
pub use loader::{
    comment_from_value, load_comments, load_non_empty_comments, read_comments, COMMENT_FIELD,
    DEFAULT_BUFFER_SIZE,
};
