//! Named, bounded design parameters
//!
//! A [`ParameterSpace`] is the optimizer's description of the search domain:
//! an ordered list of named parameters, each constrained to an inclusive
//! `[low, high]` interval. Candidate parameter vectors are stored positionally
//! and interpreted against the space's declaration order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoError, EvoResult};

/// Inclusive bounds for a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound (inclusive)
    pub high: f64,
}

impl Bounds {
    /// Get the range (high - low)
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }

    /// Draw a uniform sample within bounds
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high)
    }
}

/// A single named design parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, e.g. `cell_d`
    pub name: String,
    /// Allowed interval
    pub bounds: Bounds,
}

/// Ordered collection of named, bounded parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpace {
    params: Vec<Parameter>,
}

impl ParameterSpace {
    /// Build a parameter space from `(name, low, high)` triples.
    ///
    /// Fails with [`EvoError::InvalidBounds`] if any `low >= high`, and with
    /// [`EvoError::EmptyParameterSpace`] if no parameters are given.
    pub fn new<S, I>(params: I) -> EvoResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64, f64)>,
    {
        let params: Vec<Parameter> = params
            .into_iter()
            .map(|(name, low, high)| {
                let name = name.into();
                if low >= high {
                    return Err(EvoError::InvalidBounds { name, low, high });
                }
                Ok(Parameter {
                    name,
                    bounds: Bounds { low, high },
                })
            })
            .collect::<EvoResult<_>>()?;

        if params.is_empty() {
            return Err(EvoError::EmptyParameterSpace);
        }
        Ok(Self { params })
    }

    /// Number of parameters
    pub fn dimension(&self) -> usize {
        self.params.len()
    }

    /// Parameter names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name.clone()).collect()
    }

    /// Get bounds for a specific parameter
    pub fn get(&self, index: usize) -> Option<&Bounds> {
        self.params.get(index).map(|p| &p.bounds)
    }

    /// Iterate over the parameters
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Sample a parameter vector uniformly at random within bounds
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.params.iter().map(|p| p.bounds.sample(rng)).collect()
    }

    /// Clamp a parameter vector to be within bounds
    pub fn clamp(&self, values: &mut [f64]) {
        for (value, p) in values.iter_mut().zip(&self.params) {
            *value = p.bounds.clamp(*value);
        }
    }

    /// Check that every value lies within its parameter's bounds
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.params.len()
            && values
                .iter()
                .zip(&self.params)
                .all(|(&v, p)| p.bounds.contains(v))
    }
}
