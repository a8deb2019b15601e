//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG used for square colours.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of colours. Tests rely on this to pin
//! colour sequences; production seeds from entropy via [`RngManager::from_entropy`].

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use square_sequencer_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let below = rng.next_below(0x100_0000); // [0, 2^24)
/// assert!(below < 0x100_0000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift cannot leave the all-zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Generate next random u64 value
    ///
    /// # Example
    /// ```
    /// use square_sequencer_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let value = rng.next();
    /// ```
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a uniformly distributed value in `[0, bound)`
    ///
    /// Uses rejection sampling so every value in range is equally likely.
    ///
    /// # Panics
    /// Panics if `bound` is zero
    pub fn next_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "bound must be positive");

        // Largest multiple of `bound` that fits in u64; draws at or above it
        // would skew the distribution toward small values.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return value % bound;
            }
        }
    }

    /// Get current RNG state (for replaying a colour sequence)
    ///
    /// # Example
    /// ```
    /// use square_sequencer_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let mut replay = RngManager::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_next_below_zero_bound() {
        let mut rng = RngManager::new(12345);
        rng.next_below(0);
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_below(7);
            assert!(val < 7, "next_below(7) produced {}", val);
        }
    }

    #[test]
    fn test_next_below_one_is_always_zero() {
        let mut rng = RngManager::new(4242);
        for _ in 0..10 {
            assert_eq!(rng.next_below(1), 0);
        }
    }

    #[test]
    fn test_entropy_seeds_are_nonzero() {
        let rng = RngManager::from_entropy();
        assert_ne!(rng.get_state(), 0);
    }
}
