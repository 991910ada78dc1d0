//! # SearchOptions
//!
//! The `SearchOptions` struct represents the configuration of a partition
//! search: the population size and the attempt budget for filling the
//! population with distinct candidates.
//!
//! ## Example
//!
//! ```rust
//! use glsearch::search::SearchOptions;
//!
//! // Custom parameters through the builder
//! let custom_options = SearchOptions::builder()
//!     .population_size(30)
//!     .max_init_attempts(1_000)
//!     .build();
//!
//! // Default parameters
//! let default_options = SearchOptions::default();
//! ```

use crate::error::{Result, SearchError};

/// Configuration of a partition search.
///
/// - `population_size`: the number of candidates kept alive, at least 2.
/// - `max_init_attempts`: how many random candidates initialization may
///   generate while filling the population with distinct members before it
///   gives up.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    population_size: usize,
    max_init_attempts: usize,
}

impl SearchOptions {
    pub fn new(population_size: usize, max_init_attempts: usize) -> Self {
        Self {
            population_size,
            max_init_attempts,
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn max_init_attempts(&self) -> usize {
        self.max_init_attempts
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the initialization attempt budget.
    pub fn set_max_init_attempts(&mut self, max_init_attempts: usize) {
        self.max_init_attempts = max_init_attempts;
    }

    /// Checks the options for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if the population size is below
    /// 2, or if the attempt budget is smaller than the population size and
    /// therefore cannot possibly fill it.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(SearchError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.max_init_attempts < self.population_size {
            return Err(SearchError::Configuration(format!(
                "Initialization attempt budget {} cannot fill a population of {}",
                self.max_init_attempts, self.population_size
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glsearch::search::SearchOptions;
    ///
    /// let options = SearchOptions::builder()
    ///     .population_size(20)
    ///     .build();
    /// ```
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_init_attempts: 10_000,
        }
    }
}

/// Builder for `SearchOptions`.
///
/// Provides a fluent interface for constructing `SearchOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    population_size: Option<usize>,
    max_init_attempts: Option<usize>,
}

impl SearchOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the initialization attempt budget.
    pub fn max_init_attempts(mut self, value: usize) -> Self {
        self.max_init_attempts = Some(value);
        self
    }

    /// Builds the `SearchOptions` instance.
    pub fn build(self) -> SearchOptions {
        SearchOptions {
            population_size: self.population_size.unwrap_or(50),
            max_init_attempts: self.max_init_attempts.unwrap_or(10_000),
        }
    }
}
