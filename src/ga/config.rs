//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::GaError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use onemax_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.gene_length, 100);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 20);
/// assert_eq!(config.max_generations, 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use onemax_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_gene_length(32)
///     .with_population_size(50)
///     .with_elite_count(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of genes per individual.
    pub gene_length: usize,

    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Number of elites selected each generation.
    ///
    /// The `K - 1` adjacent elite pairs are crossed over, producing
    /// `2 * (K - 1)` children, so `3K - 2` individuals enter the next
    /// population and must fit into it.
    pub elite_count: usize,

    /// Probability that an individual is picked for mutation (0.0–1.0).
    pub individual_mutation_rate: f64,

    /// Probability that a gene of a picked individual is redrawn (0.0–1.0).
    pub gene_mutation_rate: f64,

    /// Number of generations to run. There is no early termination.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            gene_length: 100,
            population_size: 100,
            elite_count: 20,
            individual_mutation_rate: 0.1,
            gene_mutation_rate: 0.1,
            max_generations: 40,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the gene length.
    pub fn with_gene_length(mut self, n: usize) -> Self {
        self.gene_length = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    /// Sets the per-individual mutation probability.
    ///
    /// Not clamped; out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_individual_mutation_rate(mut self, rate: f64) -> Self {
        self.individual_mutation_rate = rate;
        self
    }

    /// Sets the per-gene mutation probability.
    ///
    /// Not clamped; out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of children produced per generation: two per adjacent elite pair.
    pub fn progeny_count(&self) -> usize {
        2 * self.elite_count.saturating_sub(1)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`GaError::EmptyGenome`] if `gene_length == 0`
    /// - [`GaError::EmptyPopulation`] if `population_size == 0`
    /// - [`GaError::ZeroGenerations`] if `max_generations == 0`
    /// - [`GaError::InvalidSelectionSize`] unless `1 <= elite_count <= population_size`
    /// - [`GaError::PopulationSizeMismatch`] if elites plus progeny outnumber the population
    /// - [`GaError::InvalidProbability`] if a mutation rate is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), GaError> {
        if self.gene_length == 0 {
            return Err(GaError::EmptyGenome);
        }
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(GaError::ZeroGenerations);
        }
        if self.elite_count == 0 || self.elite_count > self.population_size {
            return Err(GaError::InvalidSelectionSize {
                requested: self.elite_count,
                available: self.population_size,
            });
        }
        let incoming = self.elite_count + self.progeny_count();
        if incoming > self.population_size {
            return Err(GaError::PopulationSizeMismatch {
                incoming,
                capacity: self.population_size,
            });
        }
        check_probability("individual_mutation_rate", self.individual_mutation_rate)?;
        check_probability("gene_mutation_rate", self.gene_mutation_rate)?;
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability { name, value })
    }
}
