//! Short URL-safe identifier generator.

use nanoid::alphabet::SAFE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Identifier length used for tweet ids.
pub const DEFAULT_ID_LENGTH: usize = 10;

thread_local! {
    /// Byte source for the `nanoid::format` call in progress on this thread.
    static ID_RNG: RefCell<Option<StdRng>> = const { RefCell::new(None) };
}

/// Random bytes for `nanoid::format`, drawn from the seeded byte source.
fn seeded_bytes(size: usize) -> Vec<u8> {
    ID_RNG.with(|cell| match cell.borrow_mut().as_mut() {
        Some(rng) => {
            let mut bytes = vec![0u8; size];
            rng.fill(bytes.as_mut_slice());
            bytes
        }
        None => nanoid::rngs::default(size),
    })
}

/// Generate a nanoid of `len` characters over the URL-safe alphabet.
///
/// The byte source is seeded from `rng` for this call only and cleared
/// afterwards, so ids stay reproducible without state leaking between calls.
pub fn generate_short_id<R: Rng>(rng: &mut R, len: usize) -> String {
    let seed: u64 = rng.random();
    ID_RNG.with(|cell| *cell.borrow_mut() = Some(StdRng::seed_from_u64(seed)));
    let id = nanoid::format(seeded_bytes, &SAFE, len);
    ID_RNG.with(|cell| cell.borrow_mut().take());
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = generate_short_id(&mut rng, DEFAULT_ID_LENGTH);
        assert_eq!(id.chars().count(), DEFAULT_ID_LENGTH);
        assert!(id.chars().all(|c| SAFE.contains(&c)));
    }

    #[test]
    fn test_no_collisions_in_batch() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids: HashSet<String> = (0..1000)
            .map(|_| generate_short_id(&mut rng, DEFAULT_ID_LENGTH))
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                generate_short_id(&mut rng1, DEFAULT_ID_LENGTH),
                generate_short_id(&mut rng2, DEFAULT_ID_LENGTH)
            );
        }
    }

    #[test]
    fn test_byte_source_cleared_after_call() {
        let mut rng = StdRng::seed_from_u64(42);
        generate_short_id(&mut rng, DEFAULT_ID_LENGTH);
        assert!(ID_RNG.with(|cell| cell.borrow().is_none()));
    }
}
