//! Built-in design problems
//!
//! The lattice cell trade-off study the optimizer was built for, kept as a
//! library type so runs are reproducible without any external physics layer.

use crate::objective::MultiObjective;
use crate::params::ParameterSpace;

/// Lattice cell design trade-off
///
/// Three parameters: cell diameter `cell_d` (m), strut thickness `strut_t`
/// (m), and porosity. Three minimized objectives:
///
/// 1. `pressure_proxy = 1 / cell_d^4`: Hagen-Poiseuille-style pressure
///    drop proxy; smaller cells choke the flow.
/// 2. `inv_surface_density = cell_d * strut_t`: inverse of the specific
///    surface density, so minimizing it maximizes transfer area.
/// 3. `neg_stiffness = -(1 - porosity)^2 * (strut_t / cell_d)`: negated
///    Gibson-Ashby-style stiffness index, so minimizing it maximizes
///    stiffness.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatticeCellProblem;

impl LatticeCellProblem {
    /// The manufacturable parameter ranges used in the study
    pub fn parameter_space() -> ParameterSpace {
        ParameterSpace::new(vec![
            ("cell_d", 1.5e-3, 6e-3),
            ("strut_t", 0.3e-3, 1.2e-3),
            ("porosity", 0.3, 0.7),
        ])
        .expect("static bounds are valid")
    }
}

impl MultiObjective for LatticeCellProblem {
    fn num_objectives(&self) -> usize {
        3
    }

    fn evaluate(&self, parameters: &[f64]) -> Vec<f64> {
        let cell_d = parameters[0];
        let strut_t = parameters[1];
        let porosity = parameters[2];

        let pressure_proxy = 1.0 / cell_d.powi(4);
        let inv_surface_density = cell_d * strut_t;
        let stiffness_index = (1.0 - porosity).powi(2) * (strut_t / cell_d);

        vec![pressure_proxy, inv_surface_density, -stiffness_index]
    }
}
