//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides a simple interface for drawing
//! the random values the search needs, using the `rand` crate: uniform bit
//! assignments and uniform indexes.
//!
//! ## Example
//!
//! ```rust
//! use glsearch::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::new();
//! let bits = rng.fetch_uniform_bits(8);
//!
//! assert_eq!(bits.len(), 8);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides methods for
/// drawing uniform random bits and indexes.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    ///
    /// # Returns
    ///
    /// A new `RandomNumberGenerator` instance.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a bit assignment of the given length, each bit set with
    /// probability one half, independently of the others.
    ///
    /// # Parameters
    ///
    /// - `len`: The number of bits to draw.
    ///
    /// # Returns
    ///
    /// A `Vec<bool>` containing the drawn bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glsearch::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new();
    /// let bits = rng.fetch_uniform_bits(5);
    ///
    /// assert_eq!(bits.len(), 5);
    /// ```
    pub fn fetch_uniform_bits(&mut self, len: usize) -> Vec<bool> {
        (0..len).map(|_| self.rng.gen()).collect()
    }

    /// Draws a uniform index in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glsearch::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::from_seed(42);
    /// let idx = rng.fetch_index(5);
    ///
    /// assert!(idx < 5);
    /// ```
    pub fn fetch_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
