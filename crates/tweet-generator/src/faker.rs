//! Fake author and identifier source.

use crate::generators::{name, short_id};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of synthetic author names, usernames and record ids.
///
/// [`TweetGenerator`](crate::TweetGenerator) owns one of these; tests can
/// substitute a fixed implementation.
pub trait FakeData {
    /// A human-looking full name.
    fn name(&mut self) -> String;

    /// A username without the leading `@`.
    fn username(&mut self) -> String;

    /// A short URL-safe identifier.
    fn short_id(&mut self) -> String;
}

/// [`FakeData`] backed by a seeded RNG and built-in name pools.
pub struct SeededFaker {
    rng: StdRng,
}

impl SeededFaker {
    /// Create a faker whose output is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FakeData for SeededFaker {
    fn name(&mut self) -> String {
        name::generate_full_name(&mut self.rng)
    }

    fn username(&mut self) -> String {
        name::generate_username(&mut self.rng)
    }

    fn short_id(&mut self) -> String {
        short_id::generate_short_id(&mut self.rng, short_id::DEFAULT_ID_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_faker_deterministic() {
        let mut a = SeededFaker::new(7);
        let mut b = SeededFaker::new(7);

        assert_eq!(a.name(), b.name());
        assert_eq!(a.username(), b.username());
        assert_eq!(a.short_id(), b.short_id());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededFaker::new(1);
        let mut b = SeededFaker::new(2);

        let ids_a: Vec<_> = (0..5).map(|_| a.short_id()).collect();
        let ids_b: Vec<_> = (0..5).map(|_| b.short_id()).collect();
        assert_ne!(ids_a, ids_b);
    }
}
