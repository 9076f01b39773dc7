//! Bit-string genetic operators.
//!
//! Population initialization, two-point crossover and two-level mutation.
//! Like the selection functions, every operator returns freshly owned
//! individuals and leaves its inputs untouched.
//!
//! # Crossover
//!
//! - [`cross_over`]: two-point crossover with randomly drawn cut points
//! - [`cross_over_at`]: the same splice with caller-chosen cut points
//!
//! # Mutation
//!
//! - [`mutate`]: per-individual gate, then per-gene redraw

use super::error::GaError;
use super::types::{random_gene, Gene, Individual};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates `size` random individuals of `length` genes each.
///
/// Nothing is evaluated: every fitness is `0.0`.
pub fn initialize<R: Rng>(size: usize, length: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| Individual::random(length, rng)).collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Draws the two crossover cut points for a sequence of `len` genes.
///
/// `c1` is uniform over `[0, len)`. `c2` is `c1 + floor(u * (len - c1))`
/// with `u` uniform in `[0, 1)`, so `c1 <= c2 < len`. Because `c2` depends
/// on `c1`, the pair is biased toward short segments near the end of the
/// sequence. For `len == 0` both points are `0`.
pub fn draw_cut_points<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let c1 = rng.random_range(0..len);
    let u: f64 = rng.random();
    let c2 = (c1 + (u * (len - c1) as f64) as usize).min(len - 1);
    (c1, c2)
}

/// Two-point crossover with random cut points.
///
/// See [`draw_cut_points`] for the cut distribution and [`cross_over_at`]
/// for the splice itself.
///
/// # Errors
/// [`GaError::GeneLengthMismatch`] if the parents differ in length.
pub fn cross_over<R: Rng>(
    a: &Individual,
    b: &Individual,
    rng: &mut R,
) -> Result<(Individual, Individual), GaError> {
    check_lengths(a, b)?;
    let (c1, c2) = draw_cut_points(a.len(), rng);
    cross_over_at(a, b, c1, c2)
}

/// Two-point crossover at fixed cut points.
///
/// ```text
/// child1 = a[0..c1] + b[c1..c2] + a[c2..]
/// child2 = b[0..c1] + a[c1..c2] + b[c2..]
/// ```
///
/// Children are unevaluated. `c1 == c2` reproduces the parents.
///
/// # Errors
/// [`GaError::GeneLengthMismatch`] if the parents differ in length.
///
/// # Panics
/// Panics unless `c1 <= c2 <= a.len()`.
pub fn cross_over_at(
    a: &Individual,
    b: &Individual,
    c1: usize,
    c2: usize,
) -> Result<(Individual, Individual), GaError> {
    check_lengths(a, b)?;
    assert!(
        c1 <= c2 && c2 <= a.len(),
        "cut points must satisfy c1 <= c2 <= len (c1={c1}, c2={c2}, len={})",
        a.len()
    );

    let child1 = splice(a.genes(), b.genes(), c1, c2);
    let child2 = splice(b.genes(), a.genes(), c1, c2);
    Ok((Individual::unevaluated(child1), Individual::unevaluated(child2)))
}

/// `outer[..c1] + inner[c1..c2] + outer[c2..]`
fn splice(outer: &[Gene], inner: &[Gene], c1: usize, c2: usize) -> Vec<Gene> {
    let mut child = Vec::with_capacity(outer.len());
    child.extend_from_slice(&outer[..c1]);
    child.extend_from_slice(&inner[c1..c2]);
    child.extend_from_slice(&outer[c2..]);
    child
}

fn check_lengths(a: &Individual, b: &Individual) -> Result<(), GaError> {
    if a.len() != b.len() {
        return Err(GaError::GeneLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a mutated copy of `population`.
///
/// Each individual is picked with probability `p_individual`. A picked
/// individual gets a rebuilt gene sequence in which every gene is redrawn
/// with probability `p_gene` and kept otherwise. Unpicked individuals are
/// plain copies. Fitness values are carried over untouched.
///
/// Probabilities are not checked here; [`GaConfig::validate`](super::GaConfig::validate)
/// covers them. Values at or below 0 never fire, values at or above 1 always fire.
pub fn mutate<R: Rng>(
    population: &[Individual],
    p_individual: f64,
    p_gene: f64,
    rng: &mut R,
) -> Vec<Individual> {
    let mut mutated = population.to_vec();
    for ind in &mut mutated {
        if rng.random::<f64>() < p_individual {
            let genes = ind
                .genes()
                .iter()
                .map(|&gene| {
                    if rng.random::<f64>() < p_gene {
                        random_gene(rng)
                    } else {
                        gene
                    }
                })
                .collect();
            ind.replace_genes(genes);
        }
    }
    mutated
}

// ============================================================================
// Tests
// ============================================================================
