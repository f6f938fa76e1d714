//! Evolutionary search for the pet store puzzle.
//!
//! Find a purchase of exactly 100 animals for exactly $100, where dogs cost
//! $15, cats $1 and mice $0.25, using a generational genetic algorithm
//! rather than enumeration.
//!
//! - [`ga`]: generic engine. Truncation selection, pairwise breeding with a
//!   mutated "evil twin", best-seen tracking, cooperative cancellation.
//! - [`purchase`]: the puzzle itself. The [`PetPurchase`](purchase::PetPurchase)
//!   chromosome, its fitness function, and reporting.
//!
//! # Quick start
//!
//! ```no_run
//! let result = pet_purchase::purchase::find_most_fit(20_000, 30).unwrap();
//! if result.converged() {
//!     println!("{}", result.best);
//! }
//! ```
//!
//! All randomness flows through an explicit `R: rand::Rng`; seed it via
//! [`GaConfig::with_seed`](ga::GaConfig::with_seed) or pass your own
//! generator to [`GaRunner::run_with_rng`](ga::GaRunner::run_with_rng).

pub mod error;
pub mod ga;
pub mod purchase;
pub mod random;

pub use error::ConfigError;
