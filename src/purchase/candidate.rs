//! The pet purchase chromosome.
//!
//! A [`PetPurchase`] is three counts: dogs, cats and mice. Prices are fixed
//! by the puzzle at $15, $1 and $0.25 each; the goal is exactly 100 animals
//! for exactly $100.

use std::fmt;

/// Price of one dog, in quarter dollars.
pub const DOG_PRICE_QUARTERS: u64 = 60;
/// Price of one cat, in quarter dollars.
pub const CAT_PRICE_QUARTERS: u64 = 4;
/// Price of one mouse, in quarter dollars.
pub const MOUSE_PRICE_QUARTERS: u64 = 1;

/// Number of animals a purchase must total.
pub const TARGET_COUNT: u64 = 100;
/// Budget a purchase must spend, in quarter dollars ($100).
pub const TARGET_COST_QUARTERS: u64 = 400;

/// Largest count error that still scores.
const MAX_COUNT_ERROR: u64 = 50;
/// Largest cost error that still scores, in quarter dollars ($50).
const MAX_COST_ERROR_QUARTERS: u64 = 200;

/// Score of a perfect purchase.
pub const PERFECT_FITNESS: u32 = 100;

/// A candidate purchase.
///
/// Plain value type: copying it is how the search keeps a best-seen
/// purchase that later generations cannot touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetPurchase {
    pub dogs: u32,
    pub cats: u32,
    pub mice: u32,
}

impl PetPurchase {
    pub const fn new(dogs: u32, cats: u32, mice: u32) -> Self {
        Self { dogs, cats, mice }
    }

    /// Builds a purchase from `[dogs, cats, mice]`.
    pub const fn from_genes(genes: [u32; 3]) -> Self {
        Self::new(genes[0], genes[1], genes[2])
    }

    /// The counts as `[dogs, cats, mice]`.
    pub const fn genes(&self) -> [u32; 3] {
        [self.dogs, self.cats, self.mice]
    }

    /// Total number of animals.
    pub fn total_count(&self) -> u64 {
        self.dogs as u64 + self.cats as u64 + self.mice as u64
    }

    /// Total price in quarter dollars. Exact.
    pub fn total_cost_quarters(&self) -> u64 {
        self.dogs as u64 * DOG_PRICE_QUARTERS
            + self.cats as u64 * CAT_PRICE_QUARTERS
            + self.mice as u64 * MOUSE_PRICE_QUARTERS
    }

    /// Total price in dollars.
    ///
    /// Exact for any realistic count: quarters are representable in `f64`.
    pub fn total_cost(&self) -> f64 {
        self.total_cost_quarters() as f64 / 4.0
    }

    /// Scores the purchase from 0 (worthless) to 100 (perfect).
    ///
    /// - 0 if any count is zero: a purchase needs at least one of each.
    /// - 0 if the count is off by more than 50 or the cost by more than $50.
    /// - otherwise `100 - (count error + cost error)`, rounded down to a
    ///   whole score.
    ///
    /// Only 100 animals for exactly $100 scores 100.
    pub fn fitness(&self) -> u32 {
        if self.dogs == 0 || self.cats == 0 || self.mice == 0 {
            return 0;
        }

        let count_error = self.total_count().abs_diff(TARGET_COUNT);
        let cost_error = self.total_cost_quarters().abs_diff(TARGET_COST_QUARTERS);
        if count_error > MAX_COUNT_ERROR || cost_error > MAX_COST_ERROR_QUARTERS {
            return 0;
        }

        // Penalty in quarters is at most 400 here.
        let penalty = count_error * 4 + cost_error;
        ((TARGET_COST_QUARTERS - penalty) / 4) as u32
    }

    /// Whether this is 100 animals for exactly $100.
    pub fn is_perfect(&self) -> bool {
        self.fitness() == PERFECT_FITNESS
    }
}

impl From<[u32; 3]> for PetPurchase {
    fn from(genes: [u32; 3]) -> Self {
        Self::from_genes(genes)
    }
}

impl fmt::Display for PetPurchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dogs, {} cats, {} mice ({} animals, ${:.2})",
            self.dogs,
            self.cats,
            self.mice,
            self.total_count(),
            self.total_cost()
        )
    }
}
