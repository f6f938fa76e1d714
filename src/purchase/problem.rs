//! The pet purchase puzzle as a [`GaProblem`].

use super::candidate::{PetPurchase, PERFECT_FITNESS};
use crate::error::ConfigError;
use crate::ga::operators::{reset_mutation, uniform_crossover};
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner};
use rand::Rng;
use std::ops::RangeInclusive;

/// Probability that mutation redraws any one count.
pub const MUTATION_RATE: f64 = 1.0 / 3.0;

/// Inclusive ranges random counts are drawn from.
///
/// Used for the initial population and for every mutation redraw. The
/// defaults are loose upper bounds on what a near-solution can contain:
/// 6 dogs already cost $90, 336 mice would be $84.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneRanges {
    pub dogs: RangeInclusive<u32>,
    pub cats: RangeInclusive<u32>,
    pub mice: RangeInclusive<u32>,
}

impl Default for GeneRanges {
    fn default() -> Self {
        Self {
            dogs: 1..=6,
            cats: 1..=85,
            mice: 1..=336,
        }
    }
}

impl GeneRanges {
    /// Checks that every range holds at least one value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (locus, range) in [("dogs", &self.dogs), ("cats", &self.cats), ("mice", &self.mice)] {
            if range.is_empty() {
                return Err(ConfigError::EmptyGeneRange {
                    locus,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }

    /// The ranges as `[dogs, cats, mice]`.
    pub fn as_array(&self) -> [RangeInclusive<u32>; 3] {
        [self.dogs.clone(), self.cats.clone(), self.mice.clone()]
    }

    /// Draws a purchase with each count uniform in its range.
    ///
    /// # Panics
    /// Panics if a range is empty. [`PetPurchaseProblem::new`] rejects such
    /// ranges up front; call [`validate`](Self::validate) first when sampling
    /// from hand-built ranges.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> PetPurchase {
        PetPurchase::new(
            rng.random_range(self.dogs.clone()),
            rng.random_range(self.cats.clone()),
            rng.random_range(self.mice.clone()),
        )
    }

    /// Whether every count of `purchase` lies in its range.
    pub fn contains(&self, purchase: &PetPurchase) -> bool {
        self.dogs.contains(&purchase.dogs)
            && self.cats.contains(&purchase.cats)
            && self.mice.contains(&purchase.mice)
    }
}

/// Search for 100 animals costing exactly $100.
#[derive(Debug, Clone)]
pub struct PetPurchaseProblem {
    ranges: GeneRanges,
    // Cached for mutation, which takes a fixed-size array.
    range_array: [RangeInclusive<u32>; 3],
}

impl Default for PetPurchaseProblem {
    fn default() -> Self {
        let ranges = GeneRanges::default();
        Self {
            range_array: ranges.as_array(),
            ranges,
        }
    }
}

impl PetPurchaseProblem {
    /// Creates a problem drawing counts from `ranges`.
    ///
    /// Fails if any range is empty.
    pub fn new(ranges: GeneRanges) -> Result<Self, ConfigError> {
        ranges.validate()?;
        Ok(Self {
            range_array: ranges.as_array(),
            ranges,
        })
    }

    pub fn ranges(&self) -> &GeneRanges {
        &self.ranges
    }
}

impl GaProblem for PetPurchaseProblem {
    type Individual = PetPurchase;
    type Fitness = u32;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> PetPurchase {
        self.ranges.sample(rng)
    }

    fn evaluate(&self, individual: &PetPurchase) -> u32 {
        individual.fitness()
    }

    fn crossover<R: Rng>(&self, dad: &PetPurchase, mom: &PetPurchase, rng: &mut R) -> PetPurchase {
        PetPurchase::from_genes(uniform_crossover(&dad.genes(), &mom.genes(), rng))
    }

    fn mutate<R: Rng>(&self, individual: &PetPurchase, rng: &mut R) -> PetPurchase {
        PetPurchase::from_genes(reset_mutation(
            &individual.genes(),
            &self.range_array,
            MUTATION_RATE,
            rng,
        ))
    }

    fn sentinel(&self) -> PetPurchase {
        PetPurchase::default()
    }

    fn is_optimal(&self, fitness: u32) -> bool {
        fitness == PERFECT_FITNESS
    }
}

/// Breeds up to `generations` generations of `population_size` purchases
/// and returns the fittest one seen.
///
/// Uses the default count ranges and a random seed. For a reproducible run,
/// build a [`GaConfig`] with a seed and call [`GaRunner::run`].
///
/// # Errors
/// [`ConfigError`] if `generations` is 0 or `population_size` is not an
/// even number of at least 2.
pub fn find_most_fit(
    generations: usize,
    population_size: usize,
) -> Result<GaResult<PetPurchase, u32>, ConfigError> {
    let config = GaConfig::default()
        .with_max_generations(generations)
        .with_population_size(population_size);
    GaRunner::run(&PetPurchaseProblem::default(), &config)
}
