//! tweet-synth library
//!
//! Builds a fake social-media dataset from a file of real comments.
//!
//! # Pipeline
//!
//! 1. Load comments from an NDJSON file (`comments-source`). Malformed lines
//!    are skipped; an input with no usable lines is an error.
//! 2. Generate synthetic tweets (`tweet-generator`): fake author, sampled
//!    comment, timestamp in the last 30 days, per-emoji reaction counts.
//! 3. Write them as NDJSON, one record per line (`tweet-populate-jsonl`).
//!
//! The input is validated before the output file is created, so a failed
//! run never leaves an empty output file behind.
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 tweets from comments.ndjson into tweets.ndjson
//! tweet-synth
//!
//! # Reproducible run with custom paths
//! tweet-synth --input data/comments.ndjson --output out/tweets.ndjson --count 500 --seed 42
//! ```

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

pub use comments_source as comments;
pub use tweet_core::{Reactions, Tweet, REACTION_EMOJIS};
pub use tweet_generator::{FakeData, SeededFaker, TweetGenerator};
pub use tweet_populate_jsonl::{JsonlPopulator, PopulateArgs, PopulateMetrics};

/// Default record count.
pub const DEFAULT_COUNT: u64 = 100;

/// Settings for one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// NDJSON comments file
    pub input: PathBuf,
    /// NDJSON tweets file, created or truncated
    pub output: PathBuf,
    /// Number of tweets to write
    pub count: u64,
    /// RNG seed; same seed and input give the same records apart from timestamps
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("comments.ndjson"),
            output: PathBuf::from("tweets.ndjson"),
            count: DEFAULT_COUNT,
            seed: rand::random(),
        }
    }
}

impl From<PopulateArgs> for SynthConfig {
    fn from(args: PopulateArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            count: args.count,
            seed: args.seed.unwrap_or_else(rand::random),
        }
    }
}

/// Run the full load, generate, write pipeline.
pub fn synthesize(config: &SynthConfig) -> anyhow::Result<PopulateMetrics> {
    info!(
        "Synthesizing {} tweets from {} (seed {})",
        config.count,
        config.input.display(),
        config.seed
    );

    let comments = comments_source::load_non_empty_comments(&config.input)?;

    let generator = TweetGenerator::new(comments, config.seed)
        .context("Failed to initialize tweet generator")?;
    let mut populator = JsonlPopulator::new(generator);

    let metrics = populator
        .populate(&config.output, config.count)
        .with_context(|| format!("Failed to write tweets to {}", config.output.display()))?;

    Ok(metrics)
}
