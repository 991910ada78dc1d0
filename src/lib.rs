pub mod candidate;
pub mod crossover;
pub mod error;
pub mod graph;
pub mod local_search;
pub mod objective;
pub mod population;
pub mod rng;
pub mod search;
pub mod stop;

// Re-export commonly used types for convenience
pub use error::{Result, SearchError};
