//! The pet store puzzle.
//!
//! Buy exactly 100 animals for exactly $100. Dogs cost $15, cats $1 and
//! mice $0.25, and the purchase must include at least one of each.
//!
//! The only answer is 3 dogs, 41 cats and 56 mice. The search does not
//! know that; it evolves a population of [`PetPurchase`]s with the
//! [`ga`](crate::ga) engine until one scores a perfect 100.
//!
//! ```
//! use pet_purchase::ga::{GaConfig, GaRunner};
//! use pet_purchase::purchase::{PetPurchase, PetPurchaseProblem};
//!
//! let config = GaConfig::default().with_max_generations(10).with_seed(7);
//! let result = GaRunner::run(&PetPurchaseProblem::default(), &config).unwrap();
//! assert!(result.best_fitness <= 100);
//! assert_eq!(PetPurchase::new(3, 41, 56).fitness(), 100);
//! ```

mod candidate;
mod problem;
mod report;

pub use candidate::{
    PetPurchase, CAT_PRICE_QUARTERS, DOG_PRICE_QUARTERS, MOUSE_PRICE_QUARTERS, PERFECT_FITNESS,
    TARGET_COST_QUARTERS, TARGET_COUNT,
};
pub use problem::{find_most_fit, GeneRanges, PetPurchaseProblem, MUTATION_RATE};
pub use report::Report;
