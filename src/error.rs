//! Error types for lattice-evo
//!
//! Only configuration problems are fatal. Degenerate numeric cases that can
//! arise during a run (non-finite objectives, empty fronts, reference points
//! that are not strictly worse than the ideal point) are normalized locally
//! where they occur and never surface as errors.

use thiserror::Error;

/// Top-level error type for optimizer setup and execution
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvoError {
    /// A parameter's lower bound is not strictly below its upper bound
    #[error("invalid bounds for parameter `{name}`: low ({low}) must be < high ({high})")]
    InvalidBounds { name: String, low: f64, high: f64 },

    /// The parameter space has no dimensions
    #[error("parameter space is empty")]
    EmptyParameterSpace,

    /// Tournament selection needs at least two individuals to draw from
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// The objective function returned a vector of the wrong length
    #[error("objective arity mismatch: declared {expected}, evaluated {actual}")]
    ObjectiveArityMismatch { expected: usize, actual: usize },
}

/// Result type alias for optimizer operations
pub type EvoResult<T> = Result<T, EvoError>;
