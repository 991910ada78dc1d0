/// A partition-quality objective. Implementations must be pure and
/// deterministic. Lower scores are better.
pub trait Objective: Send + Sync {
    /// The number of bits in a valid assignment, one per graph node.
    fn assignment_len(&self) -> usize;

    /// Scores a bit assignment of length `assignment_len()`. The result
    /// must be finite.
    fn evaluate(&self, bits: &[bool]) -> f64;
}
