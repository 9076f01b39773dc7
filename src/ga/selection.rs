//! Fitness ordering, elite selection and generational replacement.
//!
//! All functions here are copying transforms: the input population is never
//! reordered or modified, and the returned individuals are independent clones.
//!
//! Higher fitness is better throughout (maximization).

use super::error::GaError;
use super::types::Individual;
use std::cmp::Ordering;

/// Orders two individuals best-first. NaN sorts as equal.
fn descending(a: &Individual, b: &Individual) -> Ordering {
    b.fitness()
        .partial_cmp(&a.fitness())
        .unwrap_or(Ordering::Equal)
}

/// Returns a copy of `population` sorted by fitness, highest first.
///
/// The sort is stable: individuals with equal fitness keep their relative
/// input order.
pub fn sort_by_fitness_desc(population: &[Individual]) -> Vec<Individual> {
    let mut sorted = population.to_vec();
    sorted.sort_by(descending);
    sorted
}

/// Returns copies of the `k` fittest individuals, best first.
///
/// # Errors
/// [`GaError::InvalidSelectionSize`] if `k` exceeds the population size.
pub fn select_elite(population: &[Individual], k: usize) -> Result<Vec<Individual>, GaError> {
    if k > population.len() {
        return Err(GaError::InvalidSelectionSize {
            requested: k,
            available: population.len(),
        });
    }
    let mut sorted = sort_by_fitness_desc(population);
    sorted.truncate(k);
    Ok(sorted)
}

/// Builds the next population from `current`, `elite` and `progeny`.
///
/// `current` is sorted best-first, its weakest `elite.len() + progeny.len()`
/// members are dropped, then `elite` and `progeny` are appended in that
/// order. The result has the same size as `current`.
///
/// # Errors
/// [`GaError::PopulationSizeMismatch`] if elite and progeny together
/// outnumber `current`.
pub fn replace_generation(
    current: &[Individual],
    elite: &[Individual],
    progeny: &[Individual],
) -> Result<Vec<Individual>, GaError> {
    let incoming = elite.len() + progeny.len();
    if incoming > current.len() {
        return Err(GaError::PopulationSizeMismatch {
            incoming,
            capacity: current.len(),
        });
    }

    let mut next = sort_by_fitness_desc(current);
    next.truncate(current.len() - incoming);
    next.extend_from_slice(elite);
    next.extend_from_slice(progeny);
    Ok(next)
}
