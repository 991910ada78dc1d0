//! # Error Types
//!
//! This module defines the error types for the search library. It provides
//! specific error variants for the failure scenarios that may occur while
//! configuring and running a partition search.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use glsearch::error::{Result, SearchError};
//!
//! fn checked_len(len: usize) -> Result<usize> {
//!     if len == 0 {
//!         return Err(SearchError::Configuration(
//!             "assignment length must be positive".to_string(),
//!         ));
//!     }
//!     Ok(len)
//! }
//!
//! assert!(checked_len(0).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the search library.
///
/// This enum provides specific error variants for the failure scenarios
/// that may occur while configuring and running a partition search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when two bit assignments of different lengths meet
    /// in an operation that requires equal lengths.
    #[error("Assignment length mismatch: {left} != {right}")]
    AssignmentLengthMismatch { left: usize, right: usize },

    /// Error that occurs when an operation requires a fitness that has not
    /// been assigned yet.
    #[error("Missing fitness: {0}")]
    MissingFitness(String),

    /// Error that occurs when an objective produces NaN or infinity.
    #[error("Non-finite fitness value: {0}")]
    NonFiniteFitness(f64),

    /// Error that occurs when initialization cannot fill the population with
    /// distinct candidates within the configured attempt budget.
    #[error(
        "Initialization stalled after {attempts} attempts: produced {reached} of {target} distinct candidates"
    )]
    InitializationStalled {
        attempts: usize,
        reached: usize,
        target: usize,
    },
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SearchError`.
///
/// ## Examples
///
/// ```rust
/// use glsearch::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SearchError>;
