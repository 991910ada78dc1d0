//! # Candidate
//!
//! A candidate solution: one side assignment per graph node, encoded as a
//! fixed-length bit array, plus the fitness assigned to it once evaluated.
//!
//! Equality and hashing consider the bit assignment only, so two candidates
//! with the same bits are duplicates of each other regardless of their
//! fitness state. The search relies on this for duplicate rejection.
//!
//! ## Example
//!
//! ```rust
//! use glsearch::candidate::Candidate;
//!
//! let mut candidate = Candidate::new(vec![true, false, true]);
//! assert_eq!(candidate.fitness(), None);
//!
//! candidate.set_fitness(2.0);
//! assert_eq!(candidate.fitness(), Some(2.0));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::rng::RandomNumberGenerator;

/// A candidate bipartition: a fixed-length bit assignment and, once the
/// candidate has been evaluated, its fitness (lower is better).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    bits: Vec<bool>,
    fitness: Option<f64>,
}

impl Candidate {
    /// Creates an unevaluated candidate from the given bit assignment.
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits,
            fitness: None,
        }
    }

    /// Creates an unevaluated candidate with `len` bits drawn uniformly at
    /// random.
    ///
    /// # Arguments
    ///
    /// * `len` - The number of bits to draw.
    /// * `rng` - The random number generator to draw from.
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self::new(rng.fetch_uniform_bits(len))
    }

    /// Returns the bit assignment.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the number of bits in the assignment.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the assignment has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the fitness, or `None` if the candidate has not been
    /// evaluated since its bits last changed.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Sets the fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Toggles the bit at `index` and clears the fitness, since the stored
    /// value no longer describes the assignment.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
        self.fitness = None;
    }

    /// Counts the positions at which `self` and `other` disagree.
    ///
    /// The two assignments must have the same length.
    pub fn hamming_distance(&self, other: &Candidate) -> usize {
        debug_assert_eq!(self.bits.len(), other.bits.len());
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
