//! Elitist genetic algorithm for binary optimization.
//!
//! Evolves a population of fixed-length bit strings toward maximizing a
//! fitness function. The built-in objective is OneMax, the fraction of set
//! bits, but any [`ga::FitnessFunction`] can be plugged into the loop.
//!
//! All population transforms are copying: selection, crossover, replacement
//! and mutation return new individuals and never modify their inputs. The
//! only in-place write is the fitness assignment during evaluation.

pub mod ga;
