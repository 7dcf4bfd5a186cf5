//! Line-by-line comment extraction.

use crate::error::CommentSourceError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, trace};

/// Key holding the comment text in an input object.
pub const COMMENT_FIELD: &str = "comment";

/// Default buffer size for reading the input file.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Load comments from an NDJSON file.
///
/// The result may be empty; see [`load_non_empty_comments`].
pub fn load_comments<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CommentSourceError> {
    let path = path.as_ref();
    info!("Loading comments from: {}", path.display());

    let file = File::open(path).map_err(|source| CommentSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let comments = read_comments(file).map_err(|source| CommentSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} comments from {}", comments.len(), path.display());
    Ok(comments)
}

/// Load comments and fail if none could be extracted.
pub fn load_non_empty_comments<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<String>, CommentSourceError> {
    let path = path.as_ref();
    let comments = load_comments(path)?;
    if comments.is_empty() {
        return Err(CommentSourceError::NoUsableComments {
            path: path.to_path_buf(),
        });
    }
    Ok(comments)
}

/// Extract comments from any NDJSON reader.
///
/// Malformed lines are skipped. I/O errors, including invalid UTF-8, are
/// returned.
pub fn read_comments<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    let buf_reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, reader);
    let mut comments = Vec::new();
    let mut skipped = 0usize;

    for (line_count, line) in buf_reader.lines().enumerate() {
        let line = line?;
        let line_count = line_count + 1;

        match serde_json::from_str::<Value>(line.trim()) {
            Ok(value) => comments.push(comment_from_value(value)),
            Err(e) => {
                trace!("Skipping line {line_count}: {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} malformed lines");
    }

    Ok(comments)
}

/// Turn one parsed line into comment text.
///
/// Objects with a `comment` key yield that value. Anything else falls back to
/// a rendering of the whole value.
pub fn comment_from_value(value: Value) -> String {
    match value {
        Value::Object(mut obj) => match obj.remove(COMMENT_FIELD) {
            Some(comment) => value_to_text(comment),
            None => value_to_text(Value::Object(obj)),
        },
        other => value_to_text(other),
    }
}

/// Strings render as their own text, everything else as compact JSON.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
