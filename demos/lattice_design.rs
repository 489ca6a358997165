//! Lattice cell design trade-off study
//!
//! Reproduces the paper's lattice optimization run and prints the resulting
//! Pareto front and hypervolume estimate as JSON for downstream figure and
//! persistence tooling.

use lattice_evo::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Nsga2Config {
        population_size: 120,
        generations: 40,
        seed: 2025,
        hv_samples: 20_000,
        ..Nsga2Config::default()
    };

    let optimizer = Nsga2::new(LatticeCellProblem::parameter_space(), config)?;
    let outcome = optimizer.run(&LatticeCellProblem)?;

    eprintln!(
        "front size: {} | hypervolume: {:.6e} | reference point: {:?}",
        outcome.front_size, outcome.hypervolume, outcome.reference_point
    );
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
