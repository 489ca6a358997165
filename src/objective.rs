//! Objective function adapter
//!
//! The physics/domain layer supplies objectives to the optimizer through the
//! [`MultiObjective`] trait: a pure, deterministic map from a parameter vector
//! to a fixed-length vector of minimization objectives. Maximization
//! objectives must be negated by the adapter before they reach the core.

/// Multi-objective fitness function trait
pub trait MultiObjective {
    /// Number of objectives
    fn num_objectives(&self) -> usize;

    /// Evaluate all objectives (all to be minimized by convention)
    fn evaluate(&self, parameters: &[f64]) -> Vec<f64>;

    /// Evaluate with non-finite normalization.
    ///
    /// If any objective comes back NaN or infinite, every objective of the
    /// individual is forced to `+inf` so it is maximally dominated and can
    /// never reach a useful front.
    fn evaluate_guarded(&self, parameters: &[f64]) -> Vec<f64> {
        let mut objectives = self.evaluate(parameters);
        if objectives.iter().any(|v| !v.is_finite()) {
            for v in objectives.iter_mut() {
                *v = f64::INFINITY;
            }
        }
        objectives
    }
}

/// A closure-backed objective with an explicit arity
pub struct FnObjective<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    arity: usize,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    /// Wrap a closure as a multi-objective function of the given arity
    pub fn new(arity: usize, f: F) -> Self {
        Self { arity, f }
    }
}

impl<F> MultiObjective for FnObjective<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn num_objectives(&self) -> usize {
        self.arity
    }

    fn evaluate(&self, parameters: &[f64]) -> Vec<f64> {
        (self.f)(parameters)
    }
}
