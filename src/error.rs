//! Configuration errors.
//!
//! Only malformed configuration is an error. An unsuccessful search is a
//! normal outcome and is reported through [`GaResult`](crate::ga::GaResult).

/// A configuration rejected before the evolutionary loop starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("population_size must be even so every survivor has a mate, got {0}")]
    OddPopulation(usize),

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,

    #[error("gene range for {locus} is empty: [{min}, {max}]")]
    EmptyGeneRange {
        locus: &'static str,
        min: u32,
        max: u32,
    },
}
