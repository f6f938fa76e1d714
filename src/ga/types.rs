//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic evolutionary loop and a concrete problem.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `u32` and `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for u32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals are plain values. Fitness is not stored on the individual;
/// the engine asks [`GaProblem::evaluate`] whenever it needs a score, so a
/// score can never drift out of sync with the genes it describes.
///
/// `Clone` is how the runner records a best-seen individual: it keeps its own
/// copy, never a handle into the population.
pub trait Individual: Clone + Send + Sync + std::fmt::Debug {}

impl<T: Clone + Send + Sync + std::fmt::Debug> Individual for T {}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to score an individual (pure)
/// 3. **Crossover**: how to combine two parents into one child
/// 4. **Mutation**: how to derive a perturbed copy of an individual
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// The fitness type produced by [`evaluate`](Self::evaluate).
    type Fitness: Fitness;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Higher is better.
    ///
    /// Must be deterministic: equal individuals always score equally.
    /// Randomness belongs in creation, crossover and mutation only.
    fn evaluate(&self, individual: &Self::Individual) -> Self::Fitness;

    /// Produces a child from two parents.
    fn crossover<R: Rng>(
        &self,
        dad: &Self::Individual,
        mom: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Returns a mutated copy of `individual`.
    ///
    /// The default implementation returns an unchanged clone.
    fn mutate<R: Rng>(&self, individual: &Self::Individual, _rng: &mut R) -> Self::Individual {
        individual.clone()
    }

    /// The placeholder best-seen individual a run starts from.
    ///
    /// Its own score is the bar to beat: only an individual scoring strictly
    /// higher replaces it. Pick one that scores at or below anything the
    /// population can produce.
    fn sentinel(&self) -> Self::Individual;

    /// Whether `fitness` is a perfect score that ends the run.
    ///
    /// The default never converges early.
    fn is_optimal(&self, _fitness: Self::Fitness) -> bool {
        false
    }

    /// Called at the end of each generation with the best-seen fitness.
    ///
    /// Useful for progress reporting or external time-boxing. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(100u32.to_f64(), 100.0);
        assert_eq!(0.25f64.to_f64(), 0.25);
    }
}
