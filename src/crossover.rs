//! # Uniform crossover
//!
//! The recombination operator of the search: positions where the parents
//! agree are inherited, positions where they disagree are filled with fresh
//! uniform bits. When the parents disagree on more than half of their
//! positions, one of them is read inverted, since a bit assignment and its
//! complement denote the same bipartition and the complement is then the
//! closer representative.

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// Crosses two parents into a new, unevaluated child.
///
/// If the Hamming distance between the parents exceeds half the assignment
/// length (integer division), `parent1` is read bitwise-inverted for this
/// operation; the candidate itself is left untouched. Agreed positions are
/// inherited from the (possibly inverted) parents, disagreed positions are
/// filled in position order from a single uniform draw.
///
/// # Errors
///
/// Returns `SearchError::AssignmentLengthMismatch` if the parents differ in
/// length.
pub fn uniform_crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut RandomNumberGenerator,
) -> Result<Candidate> {
    if parent1.len() != parent2.len() {
        return Err(SearchError::AssignmentLengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }

    let invert = parent1.hamming_distance(parent2) > parent1.len() / 2;

    let mut child = vec![false; parent1.len()];
    let mut disagreed = Vec::new();
    for (i, (&b1, &b2)) in parent1
        .bits()
        .iter()
        .zip(parent2.bits().iter())
        .enumerate()
    {
        let b1 = b1 ^ invert;
        if b1 == b2 {
            child[i] = b1;
        } else {
            disagreed.push(i);
        }
    }

    let fills = rng.fetch_uniform_bits(disagreed.len());
    for (&index, fill) in disagreed.iter().zip(fills) {
        child[index] = fill;
    }

    Ok(Candidate::new(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_mismatched_parent_lengths() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let p1 = Candidate::new(vec![true, false]);
        let p2 = Candidate::new(vec![true, false, true]);

        let result = uniform_crossover(&p1, &p2, &mut rng);

        assert!(matches!(
            result,
            Err(SearchError::AssignmentLengthMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_agreed_positions_are_inherited() {
        // Distance 2 on length 4 does not trigger inversion, so positions
        // 1 and 2 must always carry the agreed values.
        let p1 = Candidate::new(vec![false, true, false, true]);
        let p2 = Candidate::new(vec![true, true, false, false]);

        for seed in 0..16 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let child = uniform_crossover(&p1, &p2, &mut rng).unwrap();

            assert_eq!(child.len(), 4);
            assert_eq!(child.fitness(), None);
            assert!(child.bits()[1]);
            assert!(!child.bits()[2]);
        }
    }

    #[test]
    fn test_disagreed_positions_vary() {
        let p1 = Candidate::new(vec![false, true, false, true]);
        let p2 = Candidate::new(vec![true, true, false, false]);

        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let child = uniform_crossover(&p1, &p2, &mut rng).unwrap();
            seen.insert(child.bits()[0]);
        }

        // Position 0 is disagreed, so over many seeds both fills appear.
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_distant_parent_is_read_inverted() {
        // Distance 3 on length 4 exceeds half, so parent1 is read as
        // [1, 1, 1, 1] and only position 3 remains disagreed.
        let p1 = Candidate::new(vec![false, false, false, false]);
        let p2 = Candidate::new(vec![true, true, true, false]);

        for seed in 0..16 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let child = uniform_crossover(&p1, &p2, &mut rng).unwrap();

            assert_eq!(&child.bits()[..3], &[true, true, true]);
        }

        // The original parent is untouched.
        assert_eq!(p1.bits(), &[false, false, false, false]);
    }

    #[test]
    fn test_identical_parents_produce_their_copy() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let p1 = Candidate::new(vec![true, false, true]);
        let p2 = Candidate::new(vec![true, false, true]);

        let child = uniform_crossover(&p1, &p2, &mut rng).unwrap();

        assert_eq!(child, p1);
    }

    #[test]
    fn test_same_seed_same_child() {
        let p1 = Candidate::new(vec![false, true, false, true, true, false]);
        let p2 = Candidate::new(vec![true, true, false, false, true, true]);

        let mut rng1 = RandomNumberGenerator::from_seed(13);
        let mut rng2 = RandomNumberGenerator::from_seed(13);

        let child1 = uniform_crossover(&p1, &p2, &mut rng1).unwrap();
        let child2 = uniform_crossover(&p1, &p2, &mut rng2).unwrap();

        assert_eq!(child1, child2);
    }
}
