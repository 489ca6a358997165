//! Candidate designs and the Pareto dominance relation

use serde::{Deserialize, Serialize};

/// A candidate design with evaluated objectives
///
/// `parameters` are positional against the run's [`ParameterSpace`]
/// declaration order. All objectives are minimized. `rank` and `crowding`
/// are transient annotations, recomputed every generation by the
/// non-dominated sort and crowding distance passes.
///
/// [`ParameterSpace`]: crate::params::ParameterSpace
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Parameter vector
    pub parameters: Vec<f64>,
    /// Objective values (all minimized)
    pub objectives: Vec<f64>,
    /// Pareto front index (0 = non-dominated front)
    pub rank: usize,
    /// Crowding distance (+inf for front boundary points)
    pub crowding: f64,
}

impl Individual {
    /// Create a new individual with evaluated objectives
    pub fn new(parameters: Vec<f64>, objectives: Vec<f64>) -> Self {
        Self {
            parameters,
            objectives,
            rank: usize::MAX,
            crowding: 0.0,
        }
    }

    /// Check if this individual dominates another
    /// (all objectives <= and at least one <, since we minimize)
    pub fn dominates(&self, other: &Self) -> bool {
        let at_least_as_good = self
            .objectives
            .iter()
            .zip(other.objectives.iter())
            .all(|(a, b)| a <= b);
        let strictly_better = self
            .objectives
            .iter()
            .zip(other.objectives.iter())
            .any(|(a, b)| a < b);
        at_least_as_good && strictly_better
    }
}
