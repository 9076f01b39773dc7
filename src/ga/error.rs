//! Error type shared by the GA operators and driver.
//!
//! All variants describe configuration mistakes. None of them is transient,
//! so callers should abort the run instead of retrying.

/// Errors raised by population operators and [`GaConfig::validate`](super::GaConfig::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// More elites were requested than the population holds.
    #[error("cannot select {requested} elites from a population of {available}")]
    InvalidSelectionSize { requested: usize, available: usize },

    /// Elite plus progeny do not fit into the population being replaced.
    #[error("{incoming} incoming individuals exceed population size {capacity}")]
    PopulationSizeMismatch { incoming: usize, capacity: usize },

    /// Crossover parents carry gene sequences of different lengths.
    #[error("gene length mismatch: {left} vs {right}")]
    GeneLengthMismatch { left: usize, right: usize },

    /// A mutation probability lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("gene_length must be at least 1")]
    EmptyGenome,

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,
}
