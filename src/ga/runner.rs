//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! evaluation → elite selection → crossover → replacement → mutation → repeat.
//!
//! The loop is exposed one generation at a time through [`GaRunner::step`],
//! so callers can inspect intermediate populations without running all
//! generations.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{cross_over, initialize, mutate};
use super::selection::{replace_generation, select_elite};
use super::types::{FitnessFunction, GeneList, Individual, OneMax};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Creates the runner's RNG from a seed.
fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Lifecycle of a [`GaRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Population created, no generation run yet.
    Initialized,
    /// At least one generation completed, more remain.
    Running,
    /// All configured generations completed.
    Terminated,
}

/// Minimum, maximum and mean fitness of a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessSummary {
    /// Lowest fitness.
    pub min: f64,
    /// Highest fitness.
    pub max: f64,
    /// Mean fitness.
    pub avg: f64,
}

impl FitnessSummary {
    /// Summarizes the cached fitness values of `population`.
    ///
    /// An empty population summarizes to all zeros.
    pub fn of(population: &[Individual]) -> Self {
        if population.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                avg: 0.0,
            };
        }
        let (min, max, sum) = population.iter().map(Individual::fitness).fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), f| (min.min(f), max.max(f), sum + f),
        );
        Self {
            min,
            max,
            avg: sum / population.len() as f64,
        }
    }
}

/// Statistics reported for one generation.
///
/// `min`, `max` and `avg` describe the population that was evaluated at the
/// start of the generation, before replacement and mutation produced the
/// next one.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,

    /// Lowest fitness in the evaluated population.
    pub min: f64,
    /// Highest fitness in the evaluated population.
    pub max: f64,
    /// Mean fitness of the evaluated population.
    pub avg: f64,

    /// Fittest elite selected in this generation.
    pub best: Individual,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Generation {} -----", self.generation)?;
        writeln!(f, "    Min: {:.2}", self.min)?;
        writeln!(f, "    Max: {:.2}", self.max)?;
        write!(f, "    Avg: {:.3}", self.avg)
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest elite of the last generation.
    ///
    /// This is not tracked across the run: an individual that was better in
    /// an earlier generation and later lost is not reported.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics of every generation run by [`GaRunner::run_with`].
    pub history: Vec<GenerationStats>,
}

impl fmt::Display for GaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Best individual: {}", GeneList(self.best.genes()))
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use onemax_ga::ga::{GaConfig, GaRunner, OneMax};
///
/// let config = GaConfig::default().with_max_generations(5).with_seed(42);
/// let runner = GaRunner::new(config, OneMax).unwrap();
/// let result = runner.run().unwrap();
/// assert_eq!(result.generations, 5);
/// ```
pub struct GaRunner<F: FitnessFunction = OneMax> {
    config: GaConfig,
    fitness: F,
    rng: StdRng,
    population: Vec<Individual>,
    generation: usize,
    state: RunState,
    best: Option<Individual>,
}

impl<F: FitnessFunction> GaRunner<F> {
    /// Validates `config` and creates the initial random population.
    ///
    /// # Errors
    /// Any error reported by [`GaConfig::validate`].
    pub fn new(config: GaConfig, fitness: F) -> Result<Self, GaError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let population = initialize(config.population_size, config.gene_length, &mut rng);

        info!(
            "initialized population: size={}, gene_length={}, elites={}, generations={}",
            config.population_size, config.gene_length, config.elite_count, config.max_generations
        );

        Ok(Self {
            config,
            fitness,
            rng,
            population,
            generation: 0,
            state: RunState::Initialized,
            best: None,
        })
    }

    /// The validated configuration driving this run.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Fittest elite of the most recent generation, if any ran.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` once `max_generations` generations have run.
    pub fn step(&mut self) -> Result<Option<GenerationStats>, GaError> {
        if self.generation >= self.config.max_generations {
            self.state = RunState::Terminated;
            return Ok(None);
        }

        for ind in &mut self.population {
            ind.evaluate(&self.fitness);
        }

        let elite = select_elite(&self.population, self.config.elite_count)?;

        // Adjacent elite pairs overlap: (e0, e1), (e1, e2), ...
        let mut progeny = Vec::with_capacity(self.config.progeny_count());
        for pair in elite.windows(2) {
            let (child1, child2) = cross_over(&pair[0], &pair[1], &mut self.rng)?;
            progeny.push(child1);
            progeny.push(child2);
        }

        let next = replace_generation(&self.population, &elite, &progeny)?;
        let next = mutate(
            &next,
            self.config.individual_mutation_rate,
            self.config.gene_mutation_rate,
            &mut self.rng,
        );

        // Statistics describe the evaluated population, not `next`.
        let summary = FitnessSummary::of(&self.population);
        self.generation += 1;
        let stats = GenerationStats {
            generation: self.generation,
            min: summary.min,
            max: summary.max,
            avg: summary.avg,
            best: elite[0].clone(),
        };
        debug!(
            "generation {}: min={:.2} max={:.2} avg={:.3}",
            stats.generation, stats.min, stats.max, stats.avg
        );

        self.population = next;
        self.best = Some(stats.best.clone());
        self.state = if self.generation >= self.config.max_generations {
            RunState::Terminated
        } else {
            RunState::Running
        };

        Ok(Some(stats))
    }

    /// Runs the remaining generations without observing them.
    pub fn run(self) -> Result<GaResult, GaError> {
        self.run_with(|_| {})
    }

    /// Runs the remaining generations, passing each generation's statistics
    /// to `observer`.
    ///
    /// # Errors
    /// Propagates operator errors. [`GaError::ZeroGenerations`] if no
    /// generation has completed when the loop ends.
    pub fn run_with<O>(mut self, mut observer: O) -> Result<GaResult, GaError>
    where
        O: FnMut(&GenerationStats),
    {
        let mut history = Vec::new();
        while let Some(stats) = self.step()? {
            observer(&stats);
            history.push(stats);
        }

        let best = self.best.take().ok_or(GaError::ZeroGenerations)?;
        info!(
            "finished after {} generations, best fitness {:.3}",
            self.generation,
            best.fitness()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.generation,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Gene;

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_gene_length(20)
            .with_population_size(50)
            .with_elite_count(10)
            .with_max_generations(60)
            .with_seed(42)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_elite_count(101);
        assert!(matches!(
            GaRunner::new(config, OneMax),
            Err(GaError::InvalidSelectionSize { .. })
        ));
    }

    #[test]
    fn test_initial_state() {
        let runner = GaRunner::new(small_config(), OneMax).unwrap();
        assert_eq!(runner.state(), RunState::Initialized);
        assert_eq!(runner.generation(), 0);
        assert_eq!(runner.population().len(), 50);
        assert!(runner.population().iter().all(|ind| ind.len() == 20));
        assert!(runner.best().is_none());
    }

    #[test]
    fn test_step_runs_exactly_max_generations() {
        let config = small_config().with_max_generations(3);
        let mut runner = GaRunner::new(config, OneMax).unwrap();

        for expected in 1..=3 {
            let stats = runner.step().unwrap().expect("generation should run");
            assert_eq!(stats.generation, expected);
            assert_eq!(runner.population().len(), 50);
        }
        assert_eq!(runner.state(), RunState::Terminated);
        assert!(runner.step().unwrap().is_none());
        assert_eq!(runner.generation(), 3);
    }

    #[test]
    fn test_state_transitions() {
        let config = small_config().with_max_generations(2);
        let mut runner = GaRunner::new(config, OneMax).unwrap();
        runner.step().unwrap();
        assert_eq!(runner.state(), RunState::Running);
        runner.step().unwrap();
        assert_eq!(runner.state(), RunState::Terminated);
    }

    #[test]
    fn test_stats_describe_pre_replacement_population() {
        let mut runner = GaRunner::new(small_config(), OneMax).unwrap();

        let mut evaluated = runner.population().to_vec();
        for ind in &mut evaluated {
            ind.evaluate(&OneMax);
        }
        let expected = FitnessSummary::of(&evaluated);

        let stats = runner.step().unwrap().unwrap();
        assert_eq!(stats.min, expected.min);
        assert_eq!(stats.max, expected.max);
        assert!((stats.avg - expected.avg).abs() < 1e-12);
        assert_eq!(stats.best.fitness(), expected.max);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = GaRunner::new(small_config(), OneMax).unwrap().run().unwrap();
        let b = GaRunner::new(small_config(), OneMax).unwrap().run().unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_onemax_convergence_small() {
        let result = GaRunner::new(small_config(), OneMax).unwrap().run().unwrap();
        let last = result.history.last().unwrap();
        assert!(
            last.max >= 0.9,
            "expected max >= 0.9 for 20-bit OneMax, got {}",
            last.max
        );
    }

    #[test]
    fn test_default_config_improves() {
        for seed in 0..5 {
            let config = GaConfig::default().with_seed(seed);
            let result = GaRunner::new(config, OneMax).unwrap().run().unwrap();

            assert_eq!(result.generations, 40);
            assert_eq!(result.history.len(), 40);
            let first = result.history.first().unwrap().max;
            let last = result.history.last().unwrap().max;
            assert!(
                last > first,
                "seed {seed}: max fitness should improve, first={first}, last={last}"
            );
        }
    }

    #[test]
    fn test_default_config_converges() {
        let seeds = 0..20u64;
        let mut reached = 0;
        for seed in seeds.clone() {
            let config = GaConfig::default().with_seed(seed);
            let result = GaRunner::new(config, OneMax).unwrap().run().unwrap();
            let maxes: Vec<f64> = result.history.iter().map(|s| s.max).collect();
            assert_eq!(maxes.len(), 40);

            let early = maxes[..10].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let late = maxes[30..].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(
                late >= early,
                "seed {seed}: max fitness should trend upward, early={early}, late={late}"
            );

            if maxes.iter().any(|&m| m >= 0.9) {
                reached += 1;
            }
        }
        assert!(
            reached >= 14,
            "expected most runs to reach max >= 0.9 within 40 generations, got {reached}/{}",
            seeds.count()
        );
    }

    #[test]
    fn test_result_best_is_last_elite() {
        let mut seen = Vec::new();
        let result = GaRunner::new(small_config(), OneMax)
            .unwrap()
            .run_with(|stats| seen.push(stats.best.clone()))
            .unwrap();

        assert_eq!(seen.len(), 60);
        assert_eq!(Some(&result.best), seen.last());
        assert_eq!(result.best_fitness, result.best.fitness());
    }

    #[test]
    fn test_custom_fitness_function() {
        // Minimize ones by maximizing the zero fraction
        let zeros = |genes: &[Gene]| {
            genes.iter().filter(|&&g| g == 0).count() as f64 / genes.len() as f64
        };
        let result = GaRunner::new(small_config(), zeros).unwrap().run().unwrap();
        let ones = result.best.genes().iter().filter(|&&g| g == 1).count();
        assert!(ones <= 2, "expected mostly zeros, got {ones} ones");
    }

    #[test]
    fn test_run_after_manual_steps() {
        let config = small_config().with_max_generations(5);
        let mut runner = GaRunner::new(config, OneMax).unwrap();
        runner.step().unwrap();
        runner.step().unwrap();
        let result = runner.run().unwrap();
        assert_eq!(result.generations, 5);
        assert_eq!(result.history.len(), 3);
        assert_eq!(result.history[0].generation, 3);
    }

    #[test]
    fn test_fitness_summary() {
        let pop = vec![
            Individual::new(vec![1], 0.25),
            Individual::new(vec![1], 0.75),
            Individual::new(vec![1], 0.5),
        ];
        let summary = FitnessSummary::of(&pop);
        assert_eq!(summary.min, 0.25);
        assert_eq!(summary.max, 0.75);
        assert!((summary.avg - 0.5).abs() < 1e-12);

        let empty = FitnessSummary::of(&[]);
        assert_eq!(empty.max, 0.0);
    }

    #[test]
    fn test_display_formats() {
        let stats = GenerationStats {
            generation: 3,
            min: 0.4,
            max: 0.6251,
            avg: 0.5126,
            best: Individual::new(vec![1, 0, 1], 0.6251),
        };
        assert_eq!(
            stats.to_string(),
            "----- Generation 3 -----\n    Min: 0.40\n    Max: 0.63\n    Avg: 0.513"
        );

        let result = GaResult {
            best: Individual::new(vec![1, 0, 1], 0.6251),
            best_fitness: 0.6251,
            generations: 3,
            history: vec![stats],
        };
        assert_eq!(result.to_string(), "Best individual: [ 1,0,1 ]");
    }
}
