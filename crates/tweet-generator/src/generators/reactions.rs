//! Reaction count generator.

use rand::Rng;
use tweet_core::{Reactions, MAX_REACTION_COUNT};

/// Draw one independent count in `[0, 20]` per emoji.
pub fn generate_reactions<R: Rng>(rng: &mut R) -> Reactions {
    Reactions::from_fn(|_| rng.random_range(0..=MAX_REACTION_COUNT))
}
