//! NDJSON tweet writer.
//!
//! This crate writes synthetic tweet records to a newline-delimited JSON
//! file, one record per line, generating and writing in the same pass.
//!
//! # Example
//!
//! ```ignore
//! use tweet_generator::TweetGenerator;
//! use tweet_populate_jsonl::JsonlPopulator;
//!
//! let generator = TweetGenerator::new(comments, 42)?;
//! let mut populator = JsonlPopulator::new(generator);
//!
//! let metrics = populator.populate("tweets.ndjson", 100)?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::PopulateArgs;
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
