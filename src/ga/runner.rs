//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the generational loop:
//! initialization → selection → best-seen tracking → breeding → repeat,
//! until a perfect score, the generation budget, a cancellation flag, or
//! the time limit ends the run.

use super::config::GaConfig;
use super::operators::breed;
use super::selection::select;
use super::types::{Fitness, GaProblem};
use crate::error::ConfigError;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best-seen individual reached an optimal score.
    Converged,
    /// The generation budget ran out first.
    Exhausted,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock time limit elapsed.
    TimedOut,
}

/// Result of a GA optimization run.
///
/// A run always produces a result, even when nothing better than the
/// sentinel was ever seen; see [`is_degenerate`](Self::is_degenerate).
#[derive(Debug, Clone)]
pub struct GaResult<I, F> {
    /// The best individual seen during the entire run.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: F,

    /// Generation index (from 0) at which `best` was recorded.
    ///
    /// `None` if no individual ever beat the sentinel.
    pub generation_found: Option<usize>,

    /// Number of generations that went through selection.
    pub generations: usize,

    /// Why the loop stopped.
    pub termination: Termination,

    /// Best-seen fitness at the end of each generation. Never decreases.
    pub fitness_history: Vec<f64>,
}

impl<I, F> GaResult<I, F> {
    /// Whether the search never improved on the sentinel.
    ///
    /// This is a valid, unsuccessful outcome rather than an error.
    pub fn is_degenerate(&self) -> bool {
        self.generation_found.is_none()
    }

    /// Whether the run ended on an optimal score.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Creates `size` random individuals.
pub fn create_population<P: GaProblem, R: Rng>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    (0..size).map(|_| problem.create_individual(rng)).collect()
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use pet_purchase::ga::{GaConfig, GaRunner};
/// use pet_purchase::purchase::PetPurchaseProblem;
///
/// let problem = PetPurchaseProblem::default();
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.generations <= 50);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual, P::Fitness>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best solution seen so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual, P::Fitness>, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random stream.
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations,
            seed = ?config.seed
        )
    )]
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual, P::Fitness>, ConfigError> {
        config.validate()?;

        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        // 1. Initialize population and best-seen
        let mut population = create_population(problem, config.population_size, rng);
        let mut best = problem.sentinel();
        let mut best_fitness = problem.evaluate(&best);
        let mut generation_found = None;

        let mut fitness_history = Vec::new();
        let mut generations = 0usize;
        let mut termination = Termination::Exhausted;

        tracing::info!("evolution started");

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }
            if let Some(limit) = time_limit {
                if started.elapsed() >= limit {
                    termination = Termination::TimedOut;
                    break;
                }
            }

            // Rank and truncate
            population = select(problem, population, config.population_size, config.parallel);
            generations = gen + 1;

            // Track best-seen by value
            if let Some(leader) = population.first() {
                let leader_fitness = problem.evaluate(leader);
                if leader_fitness > best_fitness {
                    best = leader.clone();
                    best_fitness = leader_fitness;
                    generation_found = Some(gen);
                    tracing::debug!(
                        generation = gen,
                        fitness = ?best_fitness,
                        individual = ?best,
                        "new best-seen individual"
                    );
                }
            }

            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(gen, best_fitness);

            if problem.is_optimal(best_fitness) {
                termination = Termination::Converged;
                break;
            }

            // Breed the survivors
            population = breed(problem, &population, rng);
            tracing::trace!(generation = gen, population = population.len(), "bred");
        }

        tracing::info!(
            ?termination,
            generations,
            best_fitness = ?best_fitness,
            generation_found = ?generation_found,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "evolution finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generation_found,
            generations,
            termination,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
