//! Core types for the tweet-synth dataset generator.
//!
//! This crate provides the record types shared across the workspace:
//!
//! - [`Tweet`] - One synthetic post, serialized as a single NDJSON line
//! - [`Reactions`] - Fixed-key emoji to count mapping
//! - [`REACTION_EMOJIS`] - The ordered emoji set every record carries
//!
//! # Architecture
//!
//! ```text
//! tweet-core (this crate)
//!    │
//!    ├─── tweet-generator       (builds Tweet values)
//!    └─── tweet-populate-jsonl  (serializes Tweet values to NDJSON)
//! ```

pub mod reactions;
pub mod tweet;

pub use reactions::{ReactionError, Reactions, MAX_REACTION_COUNT, REACTION_EMOJIS};
pub use tweet::Tweet;
