//! CLI argument definitions for the tweet writer.

use clap::Args;
use std::path::PathBuf;

/// Arguments controlling what gets generated and where it goes.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// NDJSON file of comments to sample content from
    #[arg(long, short = 'i', default_value = "comments.ndjson", env = "TWEET_SYNTH_INPUT")]
    pub input: PathBuf,

    /// NDJSON file to write tweets to (created or truncated)
    #[arg(long, short = 'o', default_value = "tweets.ndjson", env = "TWEET_SYNTH_OUTPUT")]
    pub output: PathBuf,

    /// Number of tweets to generate
    #[arg(long, short = 'n', default_value = "100", env = "TWEET_SYNTH_COUNT")]
    pub count: u64,

    /// Random seed for reproducible output (random when omitted)
    #[arg(long, env = "TWEET_SYNTH_SEED")]
    pub seed: Option<u64>,
}
