//! # BestTracker
//!
//! Per-run bookkeeping of the best candidate seen so far. Each run owns its
//! own tracker, and the driver offers every candidate it evaluates to it,
//! whether or not the candidate later enters the population.

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};

/// Records the best candidate observed by a single run.
///
/// A new candidate displaces the recorded best only when its fitness is
/// strictly lower; observing a tie or a worse candidate changes nothing.
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best: Option<Candidate>,
    observed: u64,
}

impl BestTracker {
    /// Creates a tracker that has observed nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate to the tracker.
    ///
    /// Returns `true` if the candidate became the new best.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::MissingFitness` if the candidate has not been
    /// evaluated; the observation is not counted in that case.
    pub fn observe(&mut self, candidate: &Candidate) -> Result<bool> {
        let fitness = match candidate.fitness() {
            Some(fitness) => fitness,
            None => {
                return Err(SearchError::MissingFitness(
                    "Cannot track an unevaluated candidate".to_string(),
                ))
            }
        };
        self.observed += 1;

        let improved = match self.best.as_ref().and_then(Candidate::fitness) {
            Some(current) => fitness < current,
            None => true,
        };
        if improved {
            self.best = Some(candidate.clone());
        }
        Ok(improved)
    }

    /// Returns the best candidate observed so far.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Returns the fitness of the best candidate observed so far.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().and_then(Candidate::fitness)
    }

    /// Returns how many candidates have been observed.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Consumes the tracker and returns the best candidate.
    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }
}
