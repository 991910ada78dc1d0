//! # Local Search
//!
//! This module provides the refinement seam of the search and its two
//! implementations. Every candidate the driver generates is handed to a
//! local search before it competes for a place in the population.

use std::fmt::Debug;

use rand::seq::SliceRandom;

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;

/// A trait for local search algorithms.
///
/// Implementations refine a candidate in place and must never leave it with
/// a worse fitness than it came in with. On return the candidate's fitness
/// is set to the value of its final bits; a candidate handed in unevaluated
/// is evaluated first.
pub trait LocalSearch<O>: Debug + Send + Sync
where
    O: Objective + ?Sized,
{
    /// Refines the candidate in place.
    ///
    /// Returns `true` if the candidate was improved, `false` otherwise.
    fn refine(
        &self,
        candidate: &mut Candidate,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> bool;
}

/// A first-improvement single-bit-flip hill climber.
///
/// Each pass visits the bit positions in a fresh random order, flips one
/// bit at a time, and keeps every flip that strictly lowers the fitness.
/// The climb ends when a full pass finds no improvement or the pass budget
/// is exhausted.
#[derive(Debug, Clone)]
pub struct BitFlipClimb {
    /// The maximum number of passes over the bit positions
    max_passes: usize,
}

impl BitFlipClimb {
    /// Creates a new hill climber with the given pass budget.
    ///
    /// # Arguments
    ///
    /// * `max_passes` - The maximum number of passes over the bit positions.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_passes` is 0.
    pub fn new(max_passes: usize) -> Result<Self> {
        if max_passes == 0 {
            return Err(SearchError::Configuration(
                "Maximum passes must be greater than 0".to_string(),
            ));
        }
        Ok(Self { max_passes })
    }
}

impl<O> LocalSearch<O> for BitFlipClimb
where
    O: Objective + ?Sized,
{
    fn refine(
        &self,
        candidate: &mut Candidate,
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        let mut current = match candidate.fitness() {
            Some(fitness) => fitness,
            None => {
                let fitness = objective.evaluate(candidate.bits());
                candidate.set_fitness(fitness);
                fitness
            }
        };
        let initial = current;

        let mut order: Vec<usize> = (0..candidate.len()).collect();
        for _ in 0..self.max_passes {
            order.shuffle(&mut rng.rng);
            let mut improved_this_pass = false;

            for &index in &order {
                candidate.flip(index);
                let neighbor = objective.evaluate(candidate.bits());
                if neighbor < current {
                    current = neighbor;
                    candidate.set_fitness(neighbor);
                    improved_this_pass = true;
                } else {
                    candidate.flip(index);
                    candidate.set_fitness(current);
                }
            }

            if !improved_this_pass {
                break;
            }
        }

        current < initial
    }
}

/// A pass-through refinement that leaves the candidate's bits untouched.
///
/// Useful for pure genetic runs and as a test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalSearch;

impl<O> LocalSearch<O> for NoLocalSearch
where
    O: Objective + ?Sized,
{
    fn refine(
        &self,
        candidate: &mut Candidate,
        objective: &O,
        _rng: &mut RandomNumberGenerator,
    ) -> bool {
        if candidate.fitness().is_none() {
            let fitness = objective.evaluate(candidate.bits());
            candidate.set_fitness(fitness);
        }
        false
    }
}
