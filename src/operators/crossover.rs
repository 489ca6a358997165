//! Simulated binary crossover
//!
//! Reference: Deb, K., & Agrawal, R. B. (1995). Simulated Binary Crossover
//! for Continuous Search Space.

use rand::Rng;

use crate::params::ParameterSpace;

/// Simulated Binary Crossover (SBX)
///
/// Each parameter is independently exchanged with probability
/// `exchange_probability`; an exchanged parameter gets child values from the
/// SBX spread formula, otherwise each child copies its own parent's value.
/// One call produces two children, one per parent order.
#[derive(Clone, Debug)]
pub struct SbxCrossover {
    /// Distribution index. Higher values = offspring closer to parents.
    pub eta: f64,
    /// Per-parameter probability of applying the spread formula
    pub exchange_probability: f64,
}

impl SbxCrossover {
    /// Create a new SBX crossover with the given distribution index
    pub fn new(eta: f64) -> Self {
        assert!(eta >= 0.0, "Distribution index must be non-negative");
        Self {
            eta,
            exchange_probability: 0.5,
        }
    }

    /// Set the per-parameter exchange probability
    pub fn with_exchange_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        self.exchange_probability = probability;
        self
    }

    /// Compute the spread factor β from a uniform random value
    fn spread_factor(&self, u: f64) -> f64 {
        if u <= 0.5 {
            (2.0 * u).powf(1.0 / (self.eta + 1.0))
        } else {
            (1.0 / (2.0 * (1.0 - u))).powf(1.0 / (self.eta + 1.0))
        }
    }

    /// Apply SBX to two parent vectors, producing two bounded children
    pub fn crossover<R: Rng>(
        &self,
        parent1: &[f64],
        parent2: &[f64],
        space: &ParameterSpace,
        rng: &mut R,
    ) -> (Vec<f64>, Vec<f64>) {
        debug_assert_eq!(parent1.len(), parent2.len());

        let mut child1: Vec<f64> = parent1.to_vec();
        let mut child2: Vec<f64> = parent2.to_vec();

        for i in 0..parent1.len() {
            if rng.gen::<f64>() < self.exchange_probability {
                let x1 = parent1[i];
                let x2 = parent2[i];

                // Only apply if parents differ sufficiently
                if (x1 - x2).abs() > 1e-12 {
                    let u = rng.gen::<f64>();
                    let beta = self.spread_factor(u);

                    child1[i] = 0.5 * ((1.0 + beta) * x1 + (1.0 - beta) * x2);
                    child2[i] = 0.5 * ((1.0 - beta) * x1 + (1.0 + beta) * x2);
                }
            }
        }

        // Bounds are a hard contract
        space.clamp(&mut child1);
        space.clamp(&mut child2);

        (child1, child2)
    }
}
