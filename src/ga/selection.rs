//! Truncation selection.
//!
//! Each generation the whole population is ranked by fitness and only the
//! fittest `size` individuals survive to breed. This is the one place per
//! generation where every individual is compared, O(n log n) in population
//! size.

use super::types::GaProblem;
use std::cmp::Ordering;

/// Ranks `population` by descending fitness and keeps the top `size`.
///
/// The sort is stable: individuals with equal fitness keep their relative
/// input order. If the population is smaller than `size`, all of it is
/// returned, ranked. Individuals are moved, never modified.
///
/// # Complexity
/// O(n log n)
pub fn select<P: GaProblem>(
    problem: &P,
    population: Vec<P::Individual>,
    size: usize,
    parallel: bool,
) -> Vec<P::Individual> {
    let scores = evaluate_all(problem, &population, parallel);

    let mut ranked: Vec<(P::Fitness, P::Individual)> =
        scores.into_iter().zip(population).collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked.truncate(size);

    ranked.into_iter().map(|(_, ind)| ind).collect()
}

/// Scores every individual, in population order.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate_all<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    parallel: bool,
) -> Vec<P::Fitness> {
    use rayon::prelude::*;

    if parallel {
        population.par_iter().map(|ind| problem.evaluate(ind)).collect()
    } else {
        population.iter().map(|ind| problem.evaluate(ind)).collect()
    }
}

/// Scores every individual, in population order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate_all<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    _parallel: bool,
) -> Vec<P::Fitness> {
    population.iter().map(|ind| problem.evaluate(ind)).collect()
}
