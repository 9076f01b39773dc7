//! Core type definitions for the GA.
//!
//! [`Individual`] is the candidate solution carried through the loop and
//! [`FitnessFunction`] is the contract between the generic loop and the
//! objective being maximized.

use rand::Rng;
use std::fmt;

/// A single gene, always `0` or `1`.
pub type Gene = u8;

/// Draws one gene uniformly from `{0, 1}`.
pub fn random_gene<R: Rng>(rng: &mut R) -> Gene {
    rng.random_range(0..2)
}

/// Scores a gene sequence. Higher is better.
///
/// Any `Fn(&[Gene]) -> f64` closure is a fitness function, so alternative
/// objectives can be plugged into [`GaRunner`](super::GaRunner) without
/// touching the loop.
///
/// # Thread Safety
///
/// Evaluation of one individual only writes that individual's fitness, so
/// implementations must be `Send + Sync` to keep concurrent evaluation open.
pub trait FitnessFunction: Send + Sync {
    /// Returns the fitness of `genes`.
    fn evaluate(&self, genes: &[Gene]) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[Gene]) -> f64 + Send + Sync,
{
    fn evaluate(&self, genes: &[Gene]) -> f64 {
        self(genes)
    }
}

/// Fraction of set genes: `sum(genes) / len`.
///
/// Reaches `1.0` only when every gene is `1`. An empty sequence scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl FitnessFunction for OneMax {
    fn evaluate(&self, genes: &[Gene]) -> f64 {
        if genes.is_empty() {
            return 0.0;
        }
        let ones: usize = genes.iter().map(|&g| g as usize).sum();
        ones as f64 / genes.len() as f64
    }
}

/// A candidate solution: a fixed-length gene sequence and its cached fitness.
///
/// Fields are private. The only in-place writes are the fitness assignment
/// in [`evaluate`](Individual::evaluate) and the wholesale gene replacement
/// used by mutation. `Clone` yields a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<Gene>,
    fitness: f64,
}

impl Individual {
    /// Creates an individual with the given genes and fitness.
    ///
    /// Every gene must be `0` or `1`; this is checked in debug builds.
    pub fn new(genes: Vec<Gene>, fitness: f64) -> Self {
        debug_assert!(
            genes.iter().all(|&g| g <= 1),
            "genes must be 0 or 1: {genes:?}"
        );
        Self { genes, fitness }
    }

    /// Creates an unevaluated individual (fitness `0.0`).
    pub fn unevaluated(genes: Vec<Gene>) -> Self {
        Self::new(genes, 0.0)
    }

    /// Creates an individual of `length` uniformly random genes, fitness `0.0`.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| random_gene(rng)).collect();
        Self::unevaluated(genes)
    }

    /// The gene sequence.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the gene sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Cached fitness from the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Scores the genes with `fitness_fn`, stores and returns the result.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&mut self, fitness_fn: &F) -> f64 {
        self.fitness = fitness_fn.evaluate(&self.genes);
        self.fitness
    }

    /// Replaces the whole gene sequence, keeping the cached fitness.
    pub(crate) fn replace_genes(&mut self, genes: Vec<Gene>) {
        self.genes = genes;
    }
}

/// Renders genes as `[ 1,0,1 ]`.
pub(crate) struct GeneList<'a>(pub &'a [Gene]);

impl fmt::Display for GeneList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, g) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, " ]")
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ fitness: {}, genes: {} }}",
            self.fitness,
            GeneList(&self.genes)
        )
    }
}
