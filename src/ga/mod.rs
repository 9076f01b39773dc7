//! Genetic Algorithm over fixed-length bit strings.
//!
//! An elitist single-population GA: each generation the population is
//! evaluated, the top `K` individuals are selected, adjacent elite pairs are
//! recombined with two-point crossover, the weakest individuals are replaced
//! by elites and offspring, and the result is mutated.
//!
//! # Key Types
//!
//! - [`Individual`]: Gene sequence with cached fitness
//! - [`FitnessFunction`]: Objective to maximize; [`OneMax`] is built in
//! - [`GaConfig`]: Algorithm parameters (sizes, rates, generations, seed)
//! - [`GaRunner`]: Executes the evolutionary loop one generation at a time
//! - [`GaResult`]: Final result with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, two-point crossover, mutation
//! - [`selection`]: Fitness sort, elite selection, generational replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use runner::{FitnessSummary, GaResult, GaRunner, GenerationStats, RunState};
pub use types::{random_gene, FitnessFunction, Gene, Individual, OneMax};
