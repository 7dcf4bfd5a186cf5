//! Emoji reaction counts.
//!
//! Every record carries the same ten emoji keys in the same order. Counts are
//! stored positionally so the key set cannot drift between records.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The fixed, ordered emoji set.
pub const REACTION_EMOJIS: [&str; 10] = [
    "👍", "❤️", "😂", "😮", "😢", "😡", "🔥", "🚀", "👏", "🎉",
];

/// Inclusive upper bound for a single reaction count.
pub const MAX_REACTION_COUNT: u8 = 20;

/// Errors raised when building reactions from untrusted input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReactionError {
    /// Key is not one of [`REACTION_EMOJIS`]
    #[error("Unknown reaction emoji: {0}")]
    UnknownEmoji(String),

    /// Count exceeds [`MAX_REACTION_COUNT`]
    #[error("Reaction count {count} for {emoji} is above the maximum")]
    CountOutOfRange { emoji: String, count: u8 },
}

/// Reaction counts keyed by emoji.
///
/// Serializes as a JSON object whose keys follow [`REACTION_EMOJIS`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    counts: [u8; REACTION_EMOJIS.len()],
}

impl Reactions {
    /// Build from positional counts, rejecting any count above the maximum.
    pub fn from_counts(counts: [u8; REACTION_EMOJIS.len()]) -> Result<Self, ReactionError> {
        for (emoji, count) in REACTION_EMOJIS.iter().zip(counts) {
            if count > MAX_REACTION_COUNT {
                return Err(ReactionError::CountOutOfRange {
                    emoji: emoji.to_string(),
                    count,
                });
            }
        }
        Ok(Self { counts })
    }

    /// Build by asking `count_for` for each emoji in canonical order.
    ///
    /// Counts above [`MAX_REACTION_COUNT`] are clamped to it.
    pub fn from_fn<F: FnMut(&'static str) -> u8>(mut count_for: F) -> Self {
        let mut counts = [0u8; REACTION_EMOJIS.len()];
        for (count, emoji) in counts.iter_mut().zip(REACTION_EMOJIS) {
            *count = count_for(emoji).min(MAX_REACTION_COUNT);
        }
        Self { counts }
    }

    /// Count for a given emoji, `None` if the emoji is not part of the set.
    pub fn get(&self, emoji: &str) -> Option<u8> {
        position_of(emoji).map(|idx| self.counts[idx])
    }

    /// Iterate `(emoji, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        REACTION_EMOJIS.iter().copied().zip(self.counts.iter().copied())
    }
}

fn position_of(emoji: &str) -> Option<usize> {
    REACTION_EMOJIS.iter().position(|e| *e == emoji)
}

impl Serialize for Reactions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(REACTION_EMOJIS.len()))?;
        for (emoji, count) in self.iter() {
            map.serialize_entry(emoji, &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Reactions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReactionsVisitor)
    }
}

struct ReactionsVisitor;

impl<'de> Visitor<'de> for ReactionsVisitor {
    type Value = Reactions;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map with exactly the {} reaction emoji keys", REACTION_EMOJIS.len())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<u8>; REACTION_EMOJIS.len()] = [None; REACTION_EMOJIS.len()];

        while let Some(key) = access.next_key::<String>()? {
            let idx = position_of(&key)
                .ok_or_else(|| de::Error::custom(ReactionError::UnknownEmoji(key.clone())))?;
            if slots[idx].is_some() {
                return Err(de::Error::custom(format!("duplicate reaction emoji: {key}")));
            }
            slots[idx] = Some(access.next_value()?);
        }

        let mut counts = [0u8; REACTION_EMOJIS.len()];
        for (idx, slot) in slots.iter().enumerate() {
            counts[idx] = slot.ok_or_else(|| de::Error::missing_field(REACTION_EMOJIS[idx]))?;
        }

        Reactions::from_counts(counts).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_canonical_order() {
        let reactions = Reactions::from_counts([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        let json = serde_json::to_string(&reactions).unwrap();

        let mut last = 0;
        for emoji in REACTION_EMOJIS {
            let pos = json.find(emoji).unwrap();
            assert!(pos >= last, "{emoji} out of order in {json}");
            last = pos;
        }
        assert!(json.starts_with("{\"👍\":1,"));
        assert!(json.ends_with("\"🎉\":10}"));
    }

    #[test]
    fn test_from_counts_rejects_out_of_range() {
        let result = Reactions::from_counts([0, 0, 21, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            result,
            Err(ReactionError::CountOutOfRange {
                emoji: "😂".to_string(),
                count: 21
            })
        );
    }

    #[test]
    fn test_get() {
        let reactions = Reactions::from_counts([20, 0, 0, 0, 0, 0, 0, 0, 0, 5]).unwrap();
        assert_eq!(reactions.get("👍"), Some(20));
        assert_eq!(reactions.get("🎉"), Some(5));
        assert_eq!(reactions.get("🙈"), None);
    }

    #[test]
    fn test_from_fn_visits_canonical_order() {
        let mut seen = Vec::new();
        let reactions = Reactions::from_fn(|emoji| {
            seen.push(emoji);
            seen.len() as u8
        });

        assert_eq!(seen, REACTION_EMOJIS);
        assert_eq!(reactions.get("👍"), Some(1));
        assert_eq!(reactions.get("🎉"), Some(10));
    }

    #[test]
    fn test_from_fn_clamps_to_maximum() {
        let reactions = Reactions::from_fn(|_| u8::MAX);
        assert!(reactions.iter().all(|(_, c)| c == MAX_REACTION_COUNT));
    }

    #[test]
    fn test_deserialize_rejects_missing_key() {
        let json = r#"{"👍":1,"❤️":1,"😂":1,"😮":1,"😢":1,"😡":1,"🔥":1,"🚀":1,"👏":1}"#;
        let err = serde_json::from_str::<Reactions>(json).unwrap_err();
        assert!(err.to_string().contains("🎉"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_key() {
        let json = r#"{"🙈":1}"#;
        let err = serde_json::from_str::<Reactions>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown reaction emoji"));
    }

    #[test]
    fn test_deserialize_accepts_any_key_order() {
        let json = r#"{"🎉":3,"👏":0,"🚀":0,"🔥":0,"😡":0,"😢":0,"😮":0,"😂":0,"❤️":7,"👍":0}"#;
        let reactions: Reactions = serde_json::from_str(json).unwrap();
        assert_eq!(reactions.get("🎉"), Some(3));
        assert_eq!(reactions.get("❤️"), Some(7));
    }
}
