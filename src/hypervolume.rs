//! Monte Carlo hypervolume estimation
//!
//! Estimates the objective-space volume dominated by a front relative to a
//! reference point by uniformly sampling the axis-aligned box between the
//! front's ideal point and the reference point. The estimator is biased low
//! and consistent; its error shrinks as 1/sqrt(samples).

use rand::Rng;
use serde::{Deserialize, Serialize};

const REF_EPS: f64 = 1e-9;

/// A hypervolume estimate together with the reference point actually used
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hypervolume {
    /// Monte Carlo estimate of the dominated volume
    pub estimate: f64,
    /// Reference point after any epsilon expansion
    pub reference_point: Vec<f64>,
    /// Number of Monte Carlo samples drawn
    pub samples: usize,
}

/// Monte Carlo hypervolume estimator
#[derive(Clone, Debug)]
pub struct HypervolumeEstimator {
    /// Number of uniform samples to draw
    pub samples: usize,
    /// Scale applied to the per-axis front maximum when auto-deriving the
    /// reference point (must leave the reference strictly worse than the
    /// ideal point; the epsilon push enforces that regardless)
    pub reference_scale: f64,
}

impl HypervolumeEstimator {
    /// Create an estimator with the given sample count
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            reference_scale: 1.05,
        }
    }

    /// Set the auto-derivation scale for the reference point
    pub fn with_reference_scale(mut self, scale: f64) -> Self {
        self.reference_scale = scale;
        self
    }

    /// Estimate the hypervolume of a front of minimized objective vectors.
    ///
    /// `reference` overrides the auto-derived reference point
    /// (`reference_scale` × per-axis front maximum). Either way, any axis on
    /// which the reference is not strictly worse than the ideal point is
    /// pushed outward by a relative margin plus epsilon.
    ///
    /// An empty front yields estimate 0 with an empty reference point.
    pub fn estimate<R: Rng>(
        &self,
        front: &[Vec<f64>],
        reference: Option<&[f64]>,
        rng: &mut R,
    ) -> Hypervolume {
        if front.is_empty() {
            return Hypervolume {
                estimate: 0.0,
                reference_point: reference.map(<[f64]>::to_vec).unwrap_or_default(),
                samples: self.samples,
            };
        }

        let arity = front[0].len();

        // Ideal point: component-wise minimum across the front
        let mut ideal = vec![f64::INFINITY; arity];
        let mut worst = vec![f64::NEG_INFINITY; arity];
        for point in front {
            for (axis, &v) in point.iter().enumerate() {
                ideal[axis] = ideal[axis].min(v);
                worst[axis] = worst[axis].max(v);
            }
        }

        let mut reference_point: Vec<f64> = match reference {
            Some(r) => r.to_vec(),
            None => worst.iter().map(|w| w * self.reference_scale).collect(),
        };

        // Guard: the reference must be strictly worse than the ideal point on
        // every axis; expand any axis that is not.
        for axis in 0..arity {
            if reference_point[axis] <= ideal[axis] {
                reference_point[axis] = ideal[axis] + ideal[axis].abs() * 0.05 + REF_EPS;
            }
        }

        let box_volume: f64 = reference_point
            .iter()
            .zip(&ideal)
            .map(|(r, i)| r - i)
            .product();
        if box_volume <= 0.0 || !box_volume.is_finite() {
            return Hypervolume {
                estimate: 0.0,
                reference_point,
                samples: self.samples,
            };
        }

        let mut dominated = 0usize;
        let mut sample = vec![0.0; arity];
        for _ in 0..self.samples {
            for axis in 0..arity {
                sample[axis] =
                    ideal[axis] + rng.gen::<f64>() * (reference_point[axis] - ideal[axis]);
            }
            // Dominated if some front point is <= the sample on every axis
            if front.iter().any(|point| {
                point
                    .iter()
                    .zip(&sample)
                    .all(|(p, s)| p <= s)
            }) {
                dominated += 1;
            }
        }

        Hypervolume {
            estimate: dominated as f64 / self.samples as f64 * box_volume,
            reference_point,
            samples: self.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_front_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let hv = HypervolumeEstimator::new(1000).estimate(&[], None, &mut rng);
        assert_eq!(hv.estimate, 0.0);
    }

    #[test]
    fn test_single_point_box_volume() {
        let mut rng = StdRng::seed_from_u64(1);
        let front = vec![vec![2.0, 2.0, 2.0]];
        let hv = HypervolumeEstimator::new(20_000).estimate(
            &front,
            Some(&[3.0, 3.0, 3.0]),
            &mut rng,
        );
        // Every sample in the 1x1x1 box is dominated by the single point
        assert!((hv.estimate - 1.0).abs() <= 0.05);
        assert_eq!(hv.reference_point, vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_dominating_front_has_larger_hypervolume() {
        let estimator = HypervolumeEstimator::new(20_000);

        let mut rng = StdRng::seed_from_u64(7);
        let a = estimator.estimate(&[vec![1.0, 1.0, 1.0]], Some(&[3.0, 3.0, 3.0]), &mut rng);

        let mut rng = StdRng::seed_from_u64(7);
        let b = estimator.estimate(&[vec![2.0, 2.0, 2.0]], Some(&[3.0, 3.0, 3.0]), &mut rng);

        assert!(a.estimate > b.estimate);
    }

    #[test]
    fn test_degenerate_reference_point_expanded() {
        let mut rng = StdRng::seed_from_u64(2);
        let front = vec![vec![1.0, 1.0]];
        // Supplied reference is not strictly worse on either axis
        let hv = HypervolumeEstimator::new(5000).estimate(&front, Some(&[1.0, 0.5]), &mut rng);
        assert!(hv.reference_point[0] > 1.0);
        assert!(hv.reference_point[1] > 1.0);
        assert!(hv.estimate > 0.0);
    }

    #[test]
    fn test_auto_reference_uses_scale() {
        let mut rng = StdRng::seed_from_u64(3);
        let front = vec![vec![1.0, 4.0], vec![2.0, 2.0]];
        let hv = HypervolumeEstimator::new(1000).estimate(&front, None, &mut rng);
        assert!((hv.reference_point[0] - 2.0 * 1.05).abs() < 1e-12);
        assert!((hv.reference_point[1] - 4.0 * 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_all_identical_front() {
        // Auto-derived reference of an all-zero front collapses onto the
        // ideal point; the epsilon push must still produce a nonzero box.
        let mut rng = StdRng::seed_from_u64(4);
        let front = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let hv = HypervolumeEstimator::new(2000).estimate(&front, None, &mut rng);
        assert!(hv.reference_point.iter().all(|r| *r > 0.0));
        assert!(hv.estimate > 0.0);
    }
}
