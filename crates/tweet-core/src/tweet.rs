//! The synthetic tweet record.

use crate::reactions::Reactions;
use serde::{Deserialize, Serialize};

/// One synthetic social-media post.
///
/// Field order matches the serialized key order of an output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Short URL-safe identifier
    pub id: String,
    /// Author full name
    pub display_name: String,
    /// Author handle, always starting with `@`
    pub handle: String,
    /// Comment text copied verbatim from the input
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Per-emoji reaction counts
    pub reactions: Reactions,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tweet {
        Tweet {
            id: "V1StGXR8_Z".to_string(),
            display_name: "Ada Lovelace".to_string(),
            handle: "@ada".to_string(),
            content: "héllo wörld 🚀".to_string(),
            timestamp: 1_700_000_000_000,
            reactions: Reactions::default(),
        }
    }

    #[test]
    fn test_serialized_keys() {
        let line = serde_json::to_string(&sample()).unwrap();
        assert!(line.starts_with(
            r#"{"id":"V1StGXR8_Z","displayName":"Ada Lovelace","handle":"@ada","content":"#
        ));
        assert!(line.contains(r#""timestamp":1700000000000"#));
        assert!(line.contains(r#""reactions":{"👍":0,"#));
    }

    #[test]
    fn test_non_ascii_written_literally() {
        let line = serde_json::to_string(&sample()).unwrap();
        assert!(line.contains("héllo wörld 🚀"));
        assert!(!line.contains("\\u"));
    }

    #[test]
    fn test_reads_back_from_line() {
        let tweet = sample();
        let line = serde_json::to_string(&tweet).unwrap();
        let parsed: Tweet = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, tweet);
    }
}
