//! # lattice-evo
//!
//! Multi-objective evolutionary optimizer for lattice cell design trade-off
//! exploration.
//!
//! The crate implements an elitist NSGA-II-style optimizer (fast
//! non-dominated sorting, crowding-distance diversity preservation, simulated
//! binary crossover, bounded reset mutation) together with a Monte Carlo
//! hypervolume estimator for quantifying front coverage. Objective functions
//! are supplied by the physics layer through the
//! [`MultiObjective`](objective::MultiObjective) trait; the optimizer itself
//! is independent of any particular physics.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lattice_evo::prelude::*;
//!
//! let outcome = Nsga2::new(
//!     LatticeCellProblem::parameter_space(),
//!     Nsga2Config { population_size: 120, generations: 40, seed: 2025, ..Default::default() },
//! )?
//! .run(&LatticeCellProblem)?;
//!
//! println!("front size {} hv {}", outcome.front_size, outcome.hypervolume);
//! ```
//!
//! Runs are fully deterministic for a fixed seed: one seeded generator is
//! threaded through initialization, variation, selection, and hypervolume
//! sampling.

pub mod error;
pub mod hypervolume;
pub mod individual;
pub mod objective;
pub mod operators;
pub mod optimizer;
pub mod params;
pub mod problems;
pub mod ranking;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{EvoError, EvoResult};
    pub use crate::hypervolume::{Hypervolume, HypervolumeEstimator};
    pub use crate::individual::Individual;
    pub use crate::objective::{FnObjective, MultiObjective};
    pub use crate::operators::{SbxCrossover, UniformResetMutation};
    pub use crate::optimizer::{FrontPoint, Nsga2, Nsga2Config, OptimizationOutcome};
    pub use crate::params::{Bounds, Parameter, ParameterSpace};
    pub use crate::problems::LatticeCellProblem;
    pub use crate::ranking::{crowded_compare, crowding_distance, fast_non_dominated_sort};
}
