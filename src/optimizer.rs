//! NSGA-II generational loop
//!
//! Elitist μ+λ multi-objective optimization: each generation ranks the
//! population, builds a mating pool by crowded binary tournament, produces μ
//! offspring through SBX and reset mutation, merges pool and offspring, and
//! truncates back to μ by front rank then crowding distance. A fixed
//! generation budget is the only stopping rule.
//!
//! Reference: Deb, K., Pratap, A., Agarwal, S., & Meyarivan, T. (2002).
//! A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II.
//! IEEE Transactions on Evolutionary Computation, 6(2).

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{EvoError, EvoResult};
use crate::hypervolume::HypervolumeEstimator;
use crate::individual::Individual;
use crate::objective::MultiObjective;
use crate::operators::{SbxCrossover, UniformResetMutation};
use crate::params::ParameterSpace;
use crate::ranking::{crowded_compare, crowding_distance, fast_non_dominated_sort};

/// Run configuration for [`Nsga2`]
///
/// A single integer seed determines the entire run, including initialization,
/// crossover, mutation, and hypervolume sampling: same seed, same output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Nsga2Config {
    /// Population size μ, invariant across generations
    pub population_size: usize,
    /// Fixed generation budget G
    pub generations: usize,
    /// Seed for the run-owning random generator
    pub seed: u64,
    /// SBX distribution index
    pub crossover_eta: f64,
    /// Per-parameter reset mutation probability
    pub mutation_rate: f64,
    /// Monte Carlo samples for the final hypervolume estimate
    pub hv_samples: usize,
    /// Scale for auto-deriving the hypervolume reference point
    pub reference_scale: f64,
    /// Explicit hypervolume reference point, overriding auto-derivation
    pub reference_point: Option<Vec<f64>>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 120,
            generations: 40,
            seed: 2025,
            crossover_eta: 15.0,
            mutation_rate: 0.2,
            hv_samples: 20_000,
            reference_scale: 1.05,
            reference_point: None,
        }
    }
}

/// One member of the final Pareto front
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontPoint {
    /// Parameter vector, positional against the run's parameter names
    pub parameters: Vec<f64>,
    /// Objective vector (all minimized)
    pub objectives: Vec<f64>,
}

/// Result of an optimization run
///
/// Plain structured data for downstream consumers (figure generation,
/// result persistence); the core itself does no I/O.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    /// Parameter names in declaration order
    pub parameter_names: Vec<String>,
    /// The rank-0 front (finite-objective members only)
    pub front: Vec<FrontPoint>,
    /// Number of front members
    pub front_size: usize,
    /// Monte Carlo hypervolume estimate of the front
    pub hypervolume: f64,
    /// Reference point used for the hypervolume estimate
    pub reference_point: Vec<f64>,
}

/// NSGA-II optimizer over a named parameter space
#[derive(Debug)]
pub struct Nsga2 {
    space: ParameterSpace,
    config: Nsga2Config,
    crossover: SbxCrossover,
    mutation: UniformResetMutation,
}

impl Nsga2 {
    /// Create a new optimizer.
    ///
    /// Fails if the population is too small for binary tournament selection.
    pub fn new(space: ParameterSpace, config: Nsga2Config) -> EvoResult<Self> {
        if config.population_size < 2 {
            return Err(EvoError::PopulationTooSmall(config.population_size));
        }
        let crossover = SbxCrossover::new(config.crossover_eta);
        let mutation = UniformResetMutation::new(config.mutation_rate);
        Ok(Self {
            space,
            config,
            crossover,
            mutation,
        })
    }

    /// The parameter space this optimizer searches
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    /// The run configuration
    pub fn config(&self) -> &Nsga2Config {
        &self.config
    }

    /// Sample and evaluate the initial population
    pub fn initialize_population<F, R>(
        &self,
        objective: &F,
        rng: &mut R,
    ) -> EvoResult<Vec<Individual>>
    where
        F: MultiObjective,
        R: Rng,
    {
        let expected = objective.num_objectives();
        (0..self.config.population_size)
            .map(|_| {
                let parameters = self.space.sample(rng);
                let objectives = objective.evaluate_guarded(&parameters);
                if objectives.len() != expected {
                    return Err(EvoError::ObjectiveArityMismatch {
                        expected,
                        actual: objectives.len(),
                    });
                }
                Ok(Individual::new(parameters, objectives))
            })
            .collect()
    }

    /// Binary tournament with two distinct draws.
    ///
    /// Lower rank wins; crowding distance breaks rank ties in favor of the
    /// more isolated individual.
    fn tournament_select<'a, R: Rng>(
        &self,
        population: &'a [Individual],
        rng: &mut R,
    ) -> &'a Individual {
        let n = population.len();
        let i = rng.gen_range(0..n);
        let mut j = rng.gen_range(0..n - 1);
        if j >= i {
            j += 1;
        }

        if crowded_compare(&population[i], &population[j]) {
            &population[i]
        } else {
            &population[j]
        }
    }

    /// Produce μ offspring from the mating pool.
    ///
    /// Parents are paired consecutively, wrapping at the end; each crossover
    /// call yields two children, one per parent order, each mutated and
    /// evaluated before entering the offspring pool.
    fn create_offspring<F, R>(
        &self,
        parents: &[Individual],
        objective: &F,
        rng: &mut R,
    ) -> Vec<Individual>
    where
        F: MultiObjective,
        R: Rng,
    {
        let mu = self.config.population_size;
        let mut offspring = Vec::with_capacity(mu);

        let mut pair = 0;
        while offspring.len() < mu {
            let a = &parents[pair % parents.len()];
            let b = &parents[(pair + 1) % parents.len()];

            let (mut child1, mut child2) =
                self.crossover
                    .crossover(&a.parameters, &b.parameters, &self.space, rng);
            self.mutation.mutate(&mut child1, &self.space, rng);
            self.mutation.mutate(&mut child2, &self.space, rng);

            let objectives1 = objective.evaluate_guarded(&child1);
            offspring.push(Individual::new(child1, objectives1));
            if offspring.len() < mu {
                let objectives2 = objective.evaluate_guarded(&child2);
                offspring.push(Individual::new(child2, objectives2));
            }
            pair += 2;
        }

        offspring
    }

    /// Truncate a merged pool back to μ by rank, then crowding distance
    fn environmental_select(&self, mut merged: Vec<Individual>) -> Vec<Individual> {
        let mu = self.config.population_size;

        let fronts = fast_non_dominated_sort(&mut merged);
        for front in &fronts {
            crowding_distance(&mut merged, front);
        }

        let mut next = Vec::with_capacity(mu);
        for front in fronts {
            if next.len() + front.len() <= mu {
                for &i in &front {
                    next.push(merged[i].clone());
                }
            } else {
                // Overflowing front: keep the most isolated members. Stable
                // sort preserves insertion order among crowding ties.
                let mut sorted = front;
                sorted.sort_by(|&a, &b| {
                    merged[a].rank.cmp(&merged[b].rank).then_with(|| {
                        merged[b]
                            .crowding
                            .partial_cmp(&merged[a].crowding)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                });

                let remaining = mu - next.len();
                for &i in sorted.iter().take(remaining) {
                    next.push(merged[i].clone());
                }
                break;
            }
        }

        next
    }

    /// Run one generation
    pub fn step<F, R>(&self, population: &mut Vec<Individual>, objective: &F, rng: &mut R)
    where
        F: MultiObjective,
        R: Rng,
    {
        let mu = self.config.population_size;

        // EVALUATE_FRONTS: annotate rank and crowding in place
        let fronts = fast_non_dominated_sort(population);
        for front in &fronts {
            crowding_distance(population, front);
        }

        // SELECT: μ parents via crowded binary tournament
        let parents: Vec<Individual> = (0..mu)
            .map(|_| self.tournament_select(population, rng).clone())
            .collect();

        // VARY + MERGE + ENVIRONMENTAL_SELECT
        let offspring = self.create_offspring(&parents, objective, rng);
        let mut merged = parents;
        merged.extend(offspring);
        *population = self.environmental_select(merged);
    }

    /// Run the full optimization and estimate the final front's hypervolume
    pub fn run<F: MultiObjective>(&self, objective: &F) -> EvoResult<OptimizationOutcome> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        info!(
            "nsga2 run: mu={} generations={} seed={}",
            self.config.population_size, self.config.generations, self.config.seed
        );

        let mut population = self.initialize_population(objective, &mut rng)?;

        for generation in 0..self.config.generations {
            self.step(&mut population, objective, &mut rng);
            debug!(
                "generation {}: front-0 size {}",
                generation,
                population.iter().filter(|p| p.rank == 0).count()
            );
        }

        // Final ranking of the surviving population, then rank-0 extraction.
        // Individuals whose objectives were normalized to +inf never count as
        // front members.
        let fronts = fast_non_dominated_sort(&mut population);
        for front in &fronts {
            crowding_distance(&mut population, front);
        }
        let front: Vec<FrontPoint> = population
            .iter()
            .filter(|p| p.rank == 0 && p.objectives.iter().all(|v| v.is_finite()))
            .map(|p| FrontPoint {
                parameters: p.parameters.clone(),
                objectives: p.objectives.clone(),
            })
            .collect();

        if front.is_empty() {
            warn!("degenerate run: empty Pareto front");
        }

        let front_objectives: Vec<Vec<f64>> =
            front.iter().map(|p| p.objectives.clone()).collect();
        let estimator = HypervolumeEstimator::new(self.config.hv_samples)
            .with_reference_scale(self.config.reference_scale);
        let hv = estimator.estimate(
            &front_objectives,
            self.config.reference_point.as_deref(),
            &mut rng,
        );

        info!(
            "nsga2 done: front size {} hypervolume {:.6e}",
            front.len(),
            hv.estimate
        );

        Ok(OptimizationOutcome {
            parameter_names: self.space.names(),
            front_size: front.len(),
            front,
            hypervolume: hv.estimate,
            reference_point: hv.reference_point,
        })
    }

    /// Get the rank-0 members of an annotated population
    pub fn pareto_front(population: &[Individual]) -> Vec<&Individual> {
        population.iter().filter(|p| p.rank == 0).collect()
    }
}
