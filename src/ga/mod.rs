//! Genetic Algorithm engine.
//!
//! A generic, problem-agnostic GA built on trait-based abstractions.
//! Problems plug in by implementing [`GaProblem`], which specifies how to
//! create, score, combine, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution (a plain, cloneable value)
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, budget, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best-seen individual, where it was found, and why the run stopped
//!
//! # Generation cycle
//!
//! 1. [`select`]: rank by fitness, keep the fittest `population_size`
//! 2. record the leader if it beats the best seen so far
//! 3. stop on an optimal score
//! 4. [`breed`]: adjacent pairs each yield a child and a mutated "evil twin"
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::breed;
pub use runner::{create_population, GaResult, GaRunner, Termination};
pub use selection::select;
pub use types::{Fitness, GaProblem, Individual};
