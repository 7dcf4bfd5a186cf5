//! Record generator for the tweet-synth dataset generator.
//!
//! This crate provides the [`TweetGenerator`], which turns a pool of comment
//! strings into synthetic [`Tweet`](tweet_core::Tweet) records. Author names,
//! handles and ids come from a [`FakeData`] source; the default
//! [`SeededFaker`] draws them from a seeded RNG so runs are reproducible.
//!
//! # Architecture
//!
//! ```text
//! comments: Vec<String>       FakeData (SeededFaker)
//!        │                        │
//!        ▼                        ▼
//! ┌──────────────────────────────────┐
//! │          TweetGenerator          │
//! │                                  │
//! │  - comments                      │
//! │  - faker                         │
//! │  - rng (StdRng)                  │
//! │  - index                         │
//! └────────────────┬─────────────────┘
//!                  │
//!                  ▼
//!   Tweet { id, displayName, handle, content, timestamp, reactions }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tweet_generator::TweetGenerator;
//!
//! let comments = vec!["first!".to_string(), "great thread".to_string()];
//! let mut generator = TweetGenerator::new(comments, 42).unwrap();
//! let tweet = generator.next_tweet();
//! assert!(tweet.handle.starts_with('@'));
//! ```
//!
//! # Generators
//!
//! - `name` - full names and usernames from built-in pools
//! - `short_id` - 10-character URL-safe identifiers
//! - `timestamp` - instants in the trailing 30-day window
//! - `reactions` - independent per-emoji counts in `[0, 20]`

pub mod faker;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use faker::{FakeData, SeededFaker};
pub use generator::{GeneratorError, TweetGenerator, TweetIterator};
