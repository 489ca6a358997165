//! Variation operators
//!
//! Crossover and mutation both clamp their outputs back into the parameter
//! space bounds; no individual they produce ever violates the bounds
//! contract.

pub mod crossover;
pub mod mutation;

pub use crossover::SbxCrossover;
pub use mutation::UniformResetMutation;
