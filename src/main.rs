//! Command-line interface for tweet-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: comments.ndjson -> tweets.ndjson, 100 tweets, random seed
//! tweet-synth
//!
//! # Fixed seed and count
//! tweet-synth --count 1000 --seed 42
//!
//! # Paths from the environment
//! TWEET_SYNTH_INPUT=data/comments.ndjson TWEET_SYNTH_OUTPUT=out.ndjson tweet-synth
//!
//! # Verbose logs (default level is info)
//! RUST_LOG=debug tweet-synth
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweet_synth::{synthesize, PopulateArgs, SynthConfig};

#[derive(Parser)]
#[command(name = "tweet-synth")]
#[command(about = "Generate a synthetic tweet dataset from real comments")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: PopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; info by default so the run seed is visible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SynthConfig::from(cli.args);

    let metrics = synthesize(&config)?;

    println!(
        "✅ Generated {} tweets with real comments into '{}'",
        metrics.rows_written,
        config.output.display()
    );

    Ok(())
}
