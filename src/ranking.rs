//! Non-dominated sorting and crowding distance
//!
//! Implements the ranking machinery of NSGA-II.
//!
//! Reference: Deb, K., Pratap, A., Agarwal, S., & Meyarivan, T. (2002).
//! A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II.
//! IEEE Transactions on Evolutionary Computation, 6(2).

use crate::individual::Individual;

/// Fast non-dominated sort
///
/// Partitions the population into fronts where `fronts[0]` is the
/// Pareto-optimal front, assigning each individual's `rank` to its front
/// index. O(M·N²) for M objectives and N individuals.
pub fn fast_non_dominated_sort(population: &mut [Individual]) -> Vec<Vec<usize>> {
    let n = population.len();
    if n == 0 {
        return vec![];
    }

    // domination_count[i] = number of individuals that dominate i
    let mut domination_count = vec![0usize; n];
    // dominated_set[i] = indices of individuals that i dominates
    let mut dominated_set: Vec<Vec<usize>> = vec![vec![]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if population[i].dominates(&population[j]) {
                dominated_set[i].push(j);
                domination_count[j] += 1;
            } else if population[j].dominates(&population[i]) {
                dominated_set[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = vec![];
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    let mut rank = 0;
    while !current_front.is_empty() {
        for &i in &current_front {
            population[i].rank = rank;
        }

        let mut next_front = vec![];
        for &i in &current_front {
            for &j in &dominated_set[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }

        fronts.push(current_front);
        current_front = next_front;
        rank += 1;
    }

    fronts
}

/// Calculate crowding distance for one front
///
/// Per objective axis: front boundary members get `+inf`; interior members
/// accumulate the normalized gap between their neighbors. An axis on which
/// all front members share the same value contributes nothing.
pub fn crowding_distance(population: &mut [Individual], front: &[usize]) {
    let n = front.len();
    if n == 0 {
        return;
    }
    if n <= 2 {
        for &i in front {
            population[i].crowding = f64::INFINITY;
        }
        return;
    }

    for &i in front {
        population[i].crowding = 0.0;
    }

    let num_objectives = population[front[0]].objectives.len();

    for obj in 0..num_objectives {
        // Stable sort keeps ties in insertion order, so the result is
        // deterministic for a fixed seed.
        let mut sorted: Vec<usize> = front.to_vec();
        sorted.sort_by(|&a, &b| {
            population[a].objectives[obj]
                .partial_cmp(&population[b].objectives[obj])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        population[sorted[0]].crowding = f64::INFINITY;
        population[sorted[n - 1]].crowding = f64::INFINITY;

        let obj_min = population[sorted[0]].objectives[obj];
        let obj_max = population[sorted[n - 1]].objectives[obj];
        let obj_range = obj_max - obj_min;
        // Skip degenerate axes, including fronts holding normalized +inf
        // objectives where the range is not finite.
        if obj_range <= 0.0 || !obj_range.is_finite() {
            continue;
        }

        for k in 1..(n - 1) {
            let prev = population[sorted[k - 1]].objectives[obj];
            let next = population[sorted[k + 1]].objectives[obj];
            population[sorted[k]].crowding += (next - prev) / obj_range;
        }
    }
}

/// Crowded comparison operator
///
/// Returns true if `a` is better than `b`: lower rank, or same rank with
/// higher crowding distance.
pub fn crowded_compare(a: &Individual, b: &Individual) -> bool {
    a.rank < b.rank || (a.rank == b.rank && a.crowding > b.crowding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ind(objectives: Vec<f64>) -> Individual {
        Individual::new(vec![0.0], objectives)
    }

    #[test]
    fn test_fast_non_dominated_sort() {
        let mut population = vec![
            ind(vec![1.0, 4.0]),
            ind(vec![2.0, 3.0]),
            ind(vec![3.0, 2.0]),
            ind(vec![4.0, 1.0]),
            ind(vec![3.0, 3.0]),
        ];

        let fronts = fast_non_dominated_sort(&mut population);

        // First 4 are mutually non-dominated
        assert_eq!(fronts[0].len(), 4);
        // [3,3] is dominated by [2,3] and [3,2]
        assert_eq!(fronts[1].len(), 1);

        for &i in &fronts[0] {
            assert_eq!(population[i].rank, 0);
        }
        for &i in &fronts[1] {
            assert_eq!(population[i].rank, 1);
        }
    }

    #[test]
    fn test_sort_covers_population_exactly_once() {
        let mut population = vec![
            ind(vec![1.0, 1.0]),
            ind(vec![2.0, 2.0]),
            ind(vec![3.0, 3.0]),
            ind(vec![0.5, 3.5]),
        ];
        let fronts = fast_non_dominated_sort(&mut population);

        let mut seen = vec![false; population.len()];
        for front in &fronts {
            for &i in front {
                assert!(!seen[i], "index {i} appears in two fronts");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_no_domination_within_front() {
        let mut population = vec![
            ind(vec![1.0, 4.0]),
            ind(vec![2.0, 3.0]),
            ind(vec![2.0, 5.0]),
            ind(vec![5.0, 5.0]),
        ];
        let fronts = fast_non_dominated_sort(&mut population);
        for front in &fronts {
            for &i in front {
                for &j in front {
                    assert!(!population[i].dominates(&population[j]) || i == j);
                }
            }
        }
    }

    #[test]
    fn test_empty_population() {
        let mut population: Vec<Individual> = vec![];
        assert!(fast_non_dominated_sort(&mut population).is_empty());
    }

    #[test]
    fn test_crowding_distance_boundaries() {
        let mut population = vec![
            ind(vec![0.0, 10.0]),
            ind(vec![5.0, 5.0]),
            ind(vec![10.0, 0.0]),
        ];

        let front: Vec<usize> = (0..population.len()).collect();
        crowding_distance(&mut population, &front);

        assert!(population[0].crowding.is_infinite());
        assert!(population[2].crowding.is_infinite());
        assert!(population[1].crowding.is_finite());
        assert!(population[1].crowding > 0.0);
    }

    #[test]
    fn test_crowding_small_front_all_infinite() {
        let mut population = vec![ind(vec![1.0, 2.0]), ind(vec![2.0, 1.0])];
        let front: Vec<usize> = vec![0, 1];
        crowding_distance(&mut population, &front);
        assert!(population[0].crowding.is_infinite());
        assert!(population[1].crowding.is_infinite());
    }

    #[test]
    fn test_crowding_degenerate_axis_skipped() {
        // Second axis is constant across the front; only the first axis
        // contributes, and no division by zero occurs.
        let mut population = vec![
            ind(vec![0.0, 7.0]),
            ind(vec![1.0, 7.0]),
            ind(vec![4.0, 7.0]),
        ];
        let front: Vec<usize> = vec![0, 1, 2];
        crowding_distance(&mut population, &front);

        assert!(population[0].crowding.is_infinite());
        assert!(population[2].crowding.is_infinite());
        assert!((population[1].crowding - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowded_compare() {
        let mut a = ind(vec![1.0, 1.0]);
        a.rank = 0;
        a.crowding = 2.0;

        let mut b = ind(vec![2.0, 2.0]);
        b.rank = 1;
        b.crowding = 3.0;

        let mut c = ind(vec![1.5, 1.5]);
        c.rank = 0;
        c.crowding = 1.0;

        assert!(crowded_compare(&a, &b)); // lower rank
        assert!(crowded_compare(&a, &c)); // same rank, higher crowding
        assert!(!crowded_compare(&c, &a));
    }
}
