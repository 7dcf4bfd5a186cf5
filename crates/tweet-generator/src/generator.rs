//! Main generator for producing tweet records.

use crate::faker::{FakeData, SeededFaker};
use crate::generators::{reactions, timestamp};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tweet_core::Tweet;

/// Mixes the faker seed away from the generator seed.
const FAKER_SEED_MIX: u64 = 0x9E3779B97F4A7C15;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No comments to sample content from
    #[error("Comment pool is empty")]
    EmptyCommentPool,
}

/// Generator that produces tweet records from a comment pool.
///
/// Everything except `timestamp` is determined by the seed and the faker;
/// timestamps follow the wall clock.
pub struct TweetGenerator<F: FakeData = SeededFaker> {
    /// Content pool, sampled with replacement
    comments: Vec<String>,
    /// Source of names, handles and ids
    faker: F,
    /// Seeded RNG for content, timestamps and reactions
    rng: StdRng,
    /// Number of records produced so far
    index: u64,
}

impl TweetGenerator<SeededFaker> {
    /// Create a generator whose faker is seeded from the same `seed`.
    pub fn new(comments: Vec<String>, seed: u64) -> Result<Self, GeneratorError> {
        let faker = SeededFaker::new(seed.wrapping_add(FAKER_SEED_MIX));
        Self::with_faker(comments, faker, seed)
    }
}

impl<F: FakeData> TweetGenerator<F> {
    /// Create a generator with a caller-supplied [`FakeData`] source.
    pub fn with_faker(comments: Vec<String>, faker: F, seed: u64) -> Result<Self, GeneratorError> {
        if comments.is_empty() {
            return Err(GeneratorError::EmptyCommentPool);
        }

        Ok(Self {
            comments,
            faker,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        })
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    pub fn next_tweet(&mut self) -> Tweet {
        let display_name = self.faker.name();
        let handle = format!("@{}", self.faker.username());

        // Pool is non-empty by construction
        let content = self.comments[self.rng.random_range(0..self.comments.len())].clone();

        let timestamp = timestamp::generate_recent_timestamp(&mut self.rng, Utc::now());
        let reactions = reactions::generate_reactions(&mut self.rng);
        let id = self.faker.short_id();

        self.index += 1;

        Tweet {
            id,
            display_name,
            handle,
            content,
            timestamp,
            reactions,
        }
    }

    /// Generate `count` records lazily.
    pub fn tweets(&mut self, count: u64) -> TweetIterator<'_, F> {
        TweetIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates tweet records.
pub struct TweetIterator<'a, F: FakeData> {
    generator: &'a mut TweetGenerator<F>,
    remaining: u64,
}

impl<F: FakeData> Iterator for TweetIterator<'_, F> {
    type Item = Tweet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_tweet())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
