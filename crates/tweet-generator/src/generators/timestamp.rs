//! Timestamp generators.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Width of the trailing window timestamps are drawn from.
pub const WINDOW_DAYS: i64 = 30;

/// Generate a random instant in `[now - 30 days, now]`, as epoch milliseconds.
///
/// `now` is read by the caller so each record gets its own window.
pub fn generate_recent_timestamp<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> i64 {
    let start = now - Duration::days(WINDOW_DAYS);
    generate_timestamp_between(rng, start, now).timestamp_millis()
}

/// Generate a random instant in `[start, end]` at whole-second offsets from `start`.
///
/// Returns `start` when the range is empty or inverted.
pub fn generate_timestamp_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span_secs = (end - start).num_seconds();
    if span_secs <= 0 {
        return start;
    }

    let offset = rng.random_range(0..=span_secs);
    start + Duration::seconds(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_recent_timestamp_in_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let upper = now.timestamp_millis();
        let lower = (now - Duration::days(WINDOW_DAYS)).timestamp_millis();

        for _ in 0..1000 {
            let ts = generate_recent_timestamp(&mut rng, now);
            assert!(ts >= lower && ts <= upper, "{ts} not in [{lower}, {upper}]");
        }
    }

    #[test]
    fn test_inverted_range_returns_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc::now();
        let end = start - Duration::hours(1);

        assert_eq!(generate_timestamp_between(&mut rng, start, end), start);
    }

    #[test]
    fn test_whole_second_offsets() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        let end = start + Duration::days(1);

        let dt = generate_timestamp_between(&mut rng, start, end);
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_deterministic_generation() {
        let now = Utc::now();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_recent_timestamp(&mut rng1, now),
            generate_recent_timestamp(&mut rng2, now)
        );
    }
}
