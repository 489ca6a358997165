//! Reset mutation

use rand::Rng;

use crate::params::ParameterSpace;

/// Uniform reset mutation
///
/// Each parameter is independently replaced, with a small fixed probability,
/// by a fresh uniform draw within its bounds. Exploratory rather than local:
/// the replacement ignores the current value entirely.
#[derive(Clone, Debug)]
pub struct UniformResetMutation {
    /// Per-parameter mutation probability
    pub rate: f64,
}

impl UniformResetMutation {
    /// Create a new reset mutation with the given per-parameter rate
    pub fn new(rate: f64) -> Self {
        assert!((0.0..=1.0).contains(&rate), "Rate must be in [0, 1]");
        Self { rate }
    }

    /// Mutate a parameter vector in place
    pub fn mutate<R: Rng>(&self, values: &mut [f64], space: &ParameterSpace, rng: &mut R) {
        for (i, value) in values.iter_mut().enumerate() {
            if rng.gen::<f64>() < self.rate {
                if let Some(bounds) = space.get(i) {
                    *value = bounds.sample(rng);
                }
            }
        }
    }
}

impl Default for UniformResetMutation {
    fn default() -> Self {
        Self::new(0.2)
    }
}
