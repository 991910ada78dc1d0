pub mod driver;
pub mod options;
pub mod tracker;

pub use driver::{GeneticLocalSearch, PartitionOutcome};
pub use options::{SearchOptions, SearchOptionsBuilder};
pub use tracker::BestTracker;
