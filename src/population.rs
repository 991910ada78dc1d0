//! # Population
//!
//! A bounded set of evaluated, pairwise-distinct candidates, kept at a fixed
//! size by one-for-one replacement of the worst member. The generation
//! counter records how many replacements have been accepted.

use std::cmp::Ordering;

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};

/// The candidate pool of a running search.
///
/// Members are unique by bit assignment and always carry a fitness; both are
/// enforced at insertion. Ordering is significant only around replacement
/// decisions, which sort the members ascending by fitness first.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Candidate>,
    capacity: usize,
    generations: u64,
}

impl Population {
    /// Creates an empty population that will hold exactly `capacity` members
    /// once initialization completes.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if `capacity` is less than 2,
    /// since replacement needs at least a best and a worst member.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity < 2 {
            return Err(SearchError::Configuration(format!(
                "Population capacity must be at least 2, got {}",
                capacity
            )));
        }
        Ok(Self {
            members: Vec::with_capacity(capacity),
            capacity,
            generations: 0,
        })
    }

    /// Returns the members in their current order.
    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// Returns the number of members currently held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` once the population holds `capacity` members.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// Returns the target size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of accepted replacements so far.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Returns `true` if a member with the same bit assignment is already
    /// present. Fitness plays no part in the comparison.
    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.members.contains(candidate)
    }

    /// Inserts a candidate during initialization.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if the population is already
    /// full, and `SearchError::MissingFitness` if the candidate has not been
    /// evaluated. Duplicate screening is the caller's step.
    pub fn push(&mut self, candidate: Candidate) -> Result<()> {
        if self.is_full() {
            return Err(SearchError::Configuration(format!(
                "Population is already at its capacity of {}",
                self.capacity
            )));
        }
        if candidate.fitness().is_none() {
            return Err(SearchError::MissingFitness(
                "Cannot insert an unevaluated candidate into the population".to_string(),
            ));
        }
        self.members.push(candidate);
        Ok(())
    }

    /// Sorts the members ascending by fitness. The sort is stable, so
    /// members with equal fitness keep their relative order.
    pub fn sort_by_fitness(&mut self) {
        self.members.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        });
    }

    /// Returns the member with the lowest fitness, regardless of the current
    /// member order.
    pub fn best(&self) -> Option<&Candidate> {
        self.members.iter().min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Returns the member with the highest fitness, regardless of the
    /// current member order.
    pub fn worst(&self) -> Option<&Candidate> {
        self.members.iter().max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Offers a child for steady-state replacement: sorts the members
    /// ascending by fitness, compares the child against the worst member,
    /// and replaces that member only when the child's fitness is strictly
    /// better. An accepted replacement increments the generation counter.
    ///
    /// Returns `Ok(true)` when the child was admitted and `Ok(false)` when
    /// it was discarded. A discarded child leaves the members and the
    /// counter untouched apart from the sort.
    ///
    /// The caller is expected to have screened the child for duplicates
    /// already; the population itself only checks this in debug builds.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyPopulation` if there are no members, and
    /// `SearchError::MissingFitness` if the child has not been evaluated.
    pub fn try_replace_worst(&mut self, child: Candidate) -> Result<bool> {
        if self.members.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        let child_fitness = match child.fitness() {
            Some(fitness) => fitness,
            None => {
                return Err(SearchError::MissingFitness(
                    "Cannot offer an unevaluated candidate for replacement".to_string(),
                ))
            }
        };
        debug_assert!(!self.contains(&child));

        self.sort_by_fitness();
        let worst_fitness = match self.members.last().and_then(Candidate::fitness) {
            Some(fitness) => fitness,
            None => {
                return Err(SearchError::MissingFitness(
                    "Population member has no fitness".to_string(),
                ))
            }
        };

        if child_fitness >= worst_fitness {
            return Ok(false);
        }

        let last = self.members.len() - 1;
        self.members[last] = child;
        self.generations += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(bits: Vec<bool>, fitness: f64) -> Candidate {
        let mut candidate = Candidate::new(bits);
        candidate.set_fitness(fitness);
        candidate
    }

    #[test]
    fn test_with_capacity_rejects_small_sizes() {
        assert!(matches!(
            Population::with_capacity(0),
            Err(SearchError::Configuration(_))
        ));
        assert!(matches!(
            Population::with_capacity(1),
            Err(SearchError::Configuration(_))
        ));
        assert!(Population::with_capacity(2).is_ok());
    }

    #[test]
    fn test_push_rejects_unevaluated_candidate() {
        let mut population = Population::with_capacity(2).unwrap();
        let result = population.push(Candidate::new(vec![true, false]));

        assert!(matches!(result, Err(SearchError::MissingFitness(_))));
        assert!(population.is_empty());
    }

    #[test]
    fn test_push_rejects_overfill() {
        let mut population = Population::with_capacity(2).unwrap();
        population.push(evaluated(vec![false, false], 1.0)).unwrap();
        population.push(evaluated(vec![false, true], 2.0)).unwrap();

        let result = population.push(evaluated(vec![true, true], 3.0));

        assert!(matches!(result, Err(SearchError::Configuration(_))));
        assert_eq!(population.len(), 2);
    }

    #[test]
    fn test_contains_ignores_fitness() {
        let mut population = Population::with_capacity(2).unwrap();
        population.push(evaluated(vec![true, false], 1.0)).unwrap();

        let probe = evaluated(vec![true, false], 99.0);

        assert!(population.contains(&probe));
    }

    #[test]
    fn test_sort_by_fitness_ascending() {
        let mut population = Population::with_capacity(3).unwrap();
        population.push(evaluated(vec![false, false], 3.0)).unwrap();
        population.push(evaluated(vec![false, true], 1.0)).unwrap();
        population.push(evaluated(vec![true, false], 2.0)).unwrap();

        population.sort_by_fitness();

        let fitnesses: Vec<f64> = population
            .members()
            .iter()
            .filter_map(Candidate::fitness)
            .collect();
        assert_eq!(fitnesses, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_best_and_worst() {
        let mut population = Population::with_capacity(3).unwrap();
        population.push(evaluated(vec![false, false], 3.0)).unwrap();
        population.push(evaluated(vec![false, true], 1.0)).unwrap();
        population.push(evaluated(vec![true, false], 2.0)).unwrap();

        assert_eq!(population.best().and_then(Candidate::fitness), Some(1.0));
        assert_eq!(population.worst().and_then(Candidate::fitness), Some(3.0));
    }

    #[test]
    fn test_try_replace_worst_admits_strictly_better_child() {
        let mut population = Population::with_capacity(3).unwrap();
        population.push(evaluated(vec![false, false], 3.0)).unwrap();
        population.push(evaluated(vec![false, true], 1.0)).unwrap();
        population.push(evaluated(vec![true, false], 2.0)).unwrap();

        let child = evaluated(vec![true, true], 2.5);
        let admitted = population.try_replace_worst(child.clone()).unwrap();

        assert!(admitted);
        assert_eq!(population.generations(), 1);
        assert_eq!(population.len(), 3);
        assert!(population.contains(&child));
        assert!(!population.contains(&evaluated(vec![false, false], 3.0)));
    }

    #[test]
    fn test_try_replace_worst_rejects_equal_fitness() {
        let mut population = Population::with_capacity(2).unwrap();
        population.push(evaluated(vec![false, false], 1.0)).unwrap();
        population.push(evaluated(vec![false, true], 2.0)).unwrap();

        let child = evaluated(vec![true, true], 2.0);
        let admitted = population.try_replace_worst(child.clone()).unwrap();

        assert!(!admitted);
        assert_eq!(population.generations(), 0);
        assert!(!population.contains(&child));
    }

    #[test]
    fn test_try_replace_worst_rejects_worse_child() {
        let mut population = Population::with_capacity(2).unwrap();
        population.push(evaluated(vec![false, false], 1.0)).unwrap();
        population.push(evaluated(vec![false, true], 2.0)).unwrap();

        let admitted = population
            .try_replace_worst(evaluated(vec![true, true], 5.0))
            .unwrap();

        assert!(!admitted);
        assert_eq!(population.generations(), 0);
    }

    #[test]
    fn test_try_replace_worst_on_empty_population() {
        let mut population = Population::with_capacity(2).unwrap();
        let result = population.try_replace_worst(evaluated(vec![true], 1.0));

        assert!(matches!(result, Err(SearchError::EmptyPopulation)));
    }

    #[test]
    fn test_try_replace_worst_rejects_unevaluated_child() {
        let mut population = Population::with_capacity(2).unwrap();
        population.push(evaluated(vec![false, false], 1.0)).unwrap();
        population.push(evaluated(vec![false, true], 2.0)).unwrap();

        let result = population.try_replace_worst(Candidate::new(vec![true, true]));

        assert!(matches!(result, Err(SearchError::MissingFitness(_))));
    }
}
