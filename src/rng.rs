//! DeterministicRng - Seeded Uniform Source
//!
//! TigerStyle: One explicit RNG value per generation call, passed by `&mut`.
//! No hidden globals, so the same seed always replays the same worksheet.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded source of uniform floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u32,
    rng: ChaCha8Rng,
}

impl DeterministicRng {
    /// Create an RNG for the given worksheet seed.
    ///
    /// # Example
    /// ```
    /// use drillsheet::DeterministicRng;
    /// let mut a = DeterministicRng::new(7);
    /// let mut b = DeterministicRng::new(7);
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let value: f64 = self.rng.gen();

        // Postcondition
        debug_assert!((0.0..1.0).contains(&value));

        value
    }

    /// Uniform integer in `[lo, hi]`, computed as `lo + floor(next * (hi - lo + 1))`.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    pub fn rand_int(&mut self, lo: u32, hi: u32) -> u32 {
        // Precondition
        assert!(lo <= hi, "rand_int range is empty: [{}, {}]", lo, hi);

        let span = f64::from(hi - lo) + 1.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = (self.next_f64() * span).floor() as u32;

        // A float product can only round up to `span` itself, never past it.
        let value = lo + offset.min(hi - lo);

        // Postcondition
        assert!(value >= lo && value <= hi, "rand_int escaped its range");

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = DeterministicRng::new(42);
        let mut b = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = DeterministicRng::new(1);
        let mut b = DeterministicRng::new(2);

        let left: Vec<u32> = (0..16).map(|_| a.rand_int(0, 1_000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.rand_int(0, 1_000)).collect();

        assert_ne!(left, right);
    }

    #[test]
    fn test_rand_int_bounds() {
        let mut rng = DeterministicRng::new(9);

        for _ in 0..1_000 {
            let value = rng.rand_int(3, 7);
            assert!((3..=7).contains(&value));
        }
    }

    #[test]
    fn test_rand_int_single_value() {
        let mut rng = DeterministicRng::new(9);
        assert_eq!(rng.rand_int(5, 5), 5);
    }

    #[test]
    fn test_rand_int_hits_every_value() {
        let mut rng = DeterministicRng::new(3);
        let mut seen = [false; 10];

        for _ in 0..1_000 {
            seen[rng.rand_int(0, 9) as usize] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    #[should_panic(expected = "rand_int range is empty")]
    fn test_rand_int_empty_range() {
        let mut rng = DeterministicRng::new(0);
        rng.rand_int(5, 4);
    }

    #[test]
    fn test_seed_is_remembered() {
        assert_eq!(DeterministicRng::new(0xDEAD_BEEF).seed(), 0xDEAD_BEEF);
    }
}
