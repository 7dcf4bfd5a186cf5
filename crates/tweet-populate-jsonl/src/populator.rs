//! NDJSON populator for tweet records.

use crate::error::JsonlPopulatorError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tweet_core::Tweet;
use tweet_generator::{FakeData, SeededFaker, TweetGenerator};

/// Default buffer size for NDJSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated tweets to an NDJSON file.
pub struct JsonlPopulator<F: FakeData = SeededFaker> {
    generator: TweetGenerator<F>,
}

impl<F: FakeData> JsonlPopulator<F> {
    /// Create a populator around a ready generator.
    pub fn new(generator: TweetGenerator<F>) -> Self {
        Self { generator }
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Generate `count` tweets into `output_path`.
    ///
    /// The file is created or truncated, written one record per line and
    /// flushed before returning.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating NDJSON file '{}' with {} tweets",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let tweet = self.generator.next_tweet();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            write_tweet(&mut writer, &tweet)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} tweets", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "NDJSON generation complete: {} tweets, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Write one tweet as a single JSON line.
fn write_tweet<W: Write>(writer: &mut W, tweet: &Tweet) -> Result<(), JsonlPopulatorError> {
    serde_json::to_writer(&mut *writer, tweet)?;
    writer.write_all(b"\n")?;
    Ok(())
}
