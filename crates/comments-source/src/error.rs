//! Error types for comment loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading comments.
#[derive(Error, Debug)]
pub enum CommentSourceError {
    /// The input could not be opened or read.
    #[error("Failed to read comments from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every line was empty or malformed.
    #[error("No valid comments found in '{}'", .path.display())]
    NoUsableComments { path: PathBuf },
}
