//! Genetic operators.
//!
//! Locus-wise operators for fixed-length integer chromosomes, and the
//! pairwise breeding step that builds the next generation.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: each locus from either parent with equal odds
//!
//! # Mutation Operators
//!
//! - [`reset_mutation`]: each locus independently redrawn from its range
//!
//! # Breeding
//!
//! - [`breed`]: two children per adjacent parent pair, the second mutated
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.2
//!   (random resetting for integer representations)

use super::types::GaProblem;
use rand::Rng;
use std::ops::RangeInclusive;

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover.
///
/// For every locus a fair coin decides whether the child inherits the
/// father's or the mother's value. Values are copied, never blended.
///
/// # Complexity
/// O(n)
pub fn uniform_crossover<const N: usize, R: Rng>(
    dad: &[u32; N],
    mom: &[u32; N],
    rng: &mut R,
) -> [u32; N] {
    std::array::from_fn(|i| if rng.random_bool(0.5) { dad[i] } else { mom[i] })
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Random-resetting mutation.
///
/// Each locus is, with probability `rate`, replaced by a fresh uniform
/// draw from its range in `ranges`; otherwise it is left unchanged. The
/// result therefore stays inside `ranges` wherever it was redrawn.
///
/// # Panics
/// Panics if a range is empty or `rate` is outside `[0, 1]`.
pub fn reset_mutation<const N: usize, R: Rng>(
    genes: &[u32; N],
    ranges: &[RangeInclusive<u32>; N],
    rate: f64,
    rng: &mut R,
) -> [u32; N] {
    std::array::from_fn(|i| {
        if rng.random_bool(rate) {
            rng.random_range(ranges[i].clone())
        } else {
            genes[i]
        }
    })
}

// ============================================================================
// Breeding
// ============================================================================

/// Breeds the ranked survivors into the next generation.
///
/// Survivors are paired in positional order: index 0 with 1, 2 with 3, and
/// so on. Each pair yields exactly two children: a plain crossover child and
/// an "evil twin", a second crossover child that is then mutated.
///
/// The result has `2 * (survivors.len() / 2)` individuals. With an odd
/// survivor count the last, unpaired individual is dropped.
pub fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    survivors: &[P::Individual],
    rng: &mut R,
) -> Vec<P::Individual> {
    if survivors.len() % 2 != 0 {
        tracing::trace!(
            survivors = survivors.len(),
            "dropping unpaired survivor from breeding"
        );
    }

    let mut next_generation = Vec::with_capacity(survivors.len());
    for pair in survivors.chunks_exact(2) {
        let (dad, mom) = (&pair[0], &pair[1]);

        next_generation.push(problem.crossover(dad, mom, rng));

        let twin = problem.crossover(dad, mom, rng);
        next_generation.push(problem.mutate(&twin, rng));
    }
    next_generation
}

// ============================================================================
// Tests
// ============================================================================
