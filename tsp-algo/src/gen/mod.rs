//! Genetic algorithm (§4.7): population-based metaheuristic over the
//! two-allele [`chromosome::Chromosome`] representation, with splice
//! recombination (`recombine`) producing up to eight candidate children
//! per parent pair each generation.

pub mod chromosome;
pub mod recombine;

use std::collections::HashSet;

use rand::Rng;
use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, ParamGenetic, Solution};

use crate::{nn, tick, Tick};
use chromosome::Chromosome;

/// Bound on retries for a single Fisher-Yates swap, and for a single
/// mutation attempt, before giving up on that one step.
const SWAP_RETRY_BOUND: u32 = 1_000;
/// Bound on retries for building one more distinct initial-population
/// member before concluding the instance can't support `population_size`.
const POPULATION_RETRY_BOUND: u32 = 10_000;

pub fn run(matrix: &CostMatrix, graph_info: &GraphInfo, params: &ParamGenetic, optimal: Option<i64>) -> AlgorithmResult {
    run_with_tick(matrix, graph_info, params, optimal, None)
}

pub fn run_with_tick(
    matrix: &CostMatrix,
    graph_info: &GraphInfo,
    params: &ParamGenetic,
    optimal: Option<i64>,
    tick_cb: Tick<'_>,
) -> AlgorithmResult {
    params.validate()?;

    let n = matrix.n();
    if n <= 2 {
        return nn::run_with_tick(matrix, graph_info, optimal, tick_cb);
    }

    let seed = nn::run_with_tick(matrix, graph_info, optimal, tick_cb)?;
    let base_tour = seed.path[..n].to_vec();

    let mut rng = rand::thread_rng();
    let split = ((n - 1) / 2).clamp(1, n - 2);
    let mut population = build_initial_population(matrix, &base_tour, split, params.population_size, &mut rng)?;

    for _ in 0..params.itr {
        tick(tick_cb);

        let mut seen: HashSet<Vec<usize>> = population.iter().map(Chromosome::tour).collect();
        let children = reproduce(matrix, &population, params, &mut seen);
        population.extend(children);

        for idx in 0..population.len() {
            if rng.gen_range(0..1000) < params.mutations_per_1000 {
                mutate(matrix, &mut population[idx], &mut rng, &mut seen);
            }
        }

        population.sort_by_key(Chromosome::cost);
        population.truncate(params.population_size as usize);

        if let Some(best) = population.first() {
            log::debug!("gen: generation best cost {}", best.cost());
            if optimal == Some(best.cost()) {
                break;
            }
        }
    }

    let best = population
        .into_iter()
        .min_by_key(Chromosome::cost)
        .ok_or(AlgorithmError::NoPath)?;
    Ok(Solution::new(best.tour(), best.cost()))
}

fn reproduce(
    matrix: &CostMatrix,
    population: &[Chromosome],
    params: &ParamGenetic,
    seen: &mut HashSet<Vec<usize>>,
) -> Vec<Chromosome> {
    let mut children = Vec::new();
    let target = params.children_per_itr as usize;

    for pair in population.windows(2) {
        if children.len() >= target {
            break;
        }
        let mut candidates = recombine::candidates(matrix, &pair[0], &pair[1]);
        candidates.sort_by_key(Chromosome::cost);

        let mut taken = 0u32;
        for child in candidates {
            if taken >= params.max_children_per_pair || children.len() >= target {
                break;
            }
            let tour = child.tour();
            if seen.insert(tour) {
                children.push(child);
                taken += 1;
            }
        }
    }

    children
}

fn mutate(matrix: &CostMatrix, chromosome: &mut Chromosome, rng: &mut impl Rng, seen: &mut HashSet<Vec<usize>>) {
    let n = chromosome.len();
    let original_tour = chromosome.tour();

    for _ in 0..SWAP_RETRY_BOUND {
        let i = rng.gen_range(0..n);
        let mut j = rng.gen_range(0..n);
        while j == i {
            j = rng.gen_range(0..n);
        }

        let mut candidate = chromosome.clone();
        if !candidate.swap(matrix, i, j) {
            continue;
        }
        let new_tour = candidate.tour();
        if new_tour == original_tour || seen.contains(&new_tour) {
            continue;
        }

        seen.remove(&original_tour);
        seen.insert(new_tour);
        *chromosome = candidate;
        return;
    }
    // Every attempt was infeasible or collided with an existing member:
    // keep the chromosome unmutated.
}

fn build_initial_population(
    matrix: &CostMatrix,
    base_tour: &[usize],
    split: usize,
    population_size: u32,
    rng: &mut impl Rng,
) -> Result<Vec<Chromosome>, AlgorithmError> {
    let mut population = Vec::with_capacity(population_size as usize);
    let mut seen = HashSet::new();
    let mut stalled = 0u32;

    while population.len() < population_size as usize {
        let Some(tour) = random_swap_tour(matrix, base_tour, rng) else {
            return Err(AlgorithmError::InvalidParam(
                "genetic: could not build a feasible randomized tour".into(),
            ));
        };

        if seen.insert(tour.clone()) {
            if let Some(chromosome) = Chromosome::from_tour(matrix, &tour, split) {
                population.push(chromosome);
                stalled = 0;
                continue;
            }
        }

        stalled += 1;
        if stalled >= POPULATION_RETRY_BOUND {
            return Err(AlgorithmError::InvalidParam(
                "genetic: instance does not admit population_size distinct feasible tours".into(),
            ));
        }
    }

    Ok(population)
}

/// Fisher-Yates shuffle of `base`, retrying each swap (not the whole
/// attempt) up to [`SWAP_RETRY_BOUND`] times whenever it would traverse an
/// absent edge.
fn random_swap_tour(matrix: &CostMatrix, base: &[usize], rng: &mut impl Rng) -> Option<Vec<usize>> {
    let n = base.len();
    let mut tour = base.to_vec();

    for i in (1..n).rev() {
        let mut applied = false;
        for _ in 0..SWAP_RETRY_BOUND {
            let r = rng.gen_range(0..=i);
            if r == i {
                applied = true;
                break;
            }
            tour.swap(i, r);
            if edges_feasible(matrix, &tour, i, r) {
                applied = true;
                break;
            }
            tour.swap(i, r);
        }
        if !applied {
            return None;
        }
    }

    Some(tour)
}

fn edges_feasible(matrix: &CostMatrix, tour: &[usize], i: usize, j: usize) -> bool {
    let n = tour.len();
    let mut positions = vec![(i + n - 1) % n, i, (j + n - 1) % n, j];
    positions.sort_unstable();
    positions.dedup();
    positions.iter().all(|&p| matrix.cost(tour[p], tour[(p + 1) % n]).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> CostMatrix {
        CostMatrix::new(vec![
            vec![-1, 10, 15, 20],
            vec![10, -1, 35, 25],
            vec![15, 35, -1, 30],
            vec![20, 25, 30, -1],
        ])
        .unwrap()
    }

    #[test]
    fn rejects_invalid_params() {
        let m = scenario_a();
        let g = GraphInfo { symmetric: true, full: true };
        let p = ParamGenetic {
            itr: 0,
            population_size: 4,
            children_per_itr: 2,
            max_children_per_pair: 2,
            max_v_count_crossover: 1,
            mutations_per_1000: 10,
        };
        assert!(matches!(run(&m, &g, &p, None), Err(AlgorithmError::InvalidParam(_))));
    }

    #[test]
    fn two_vertices_falls_back_to_nn() {
        let m = CostMatrix::new(vec![vec![-1, 4], vec![4, -1]]).unwrap();
        let g = GraphInfo { symmetric: true, full: true };
        let p = ParamGenetic {
            itr: 1,
            population_size: 1,
            children_per_itr: 1,
            max_children_per_pair: 1,
            max_v_count_crossover: 1,
            mutations_per_1000: 0,
        };
        let s = run(&m, &g, &p, None).unwrap();
        assert_eq!(s.cost, 8);
    }

    #[test]
    fn scenario_a_finds_the_optimum_with_enough_generations() {
        let m = scenario_a();
        let g = GraphInfo { symmetric: true, full: true };
        let p = ParamGenetic {
            itr: 50,
            population_size: 6,
            children_per_itr: 4,
            max_children_per_pair: 2,
            max_v_count_crossover: 4,
            mutations_per_1000: 100,
        };
        let s = run(&m, &g, &p, Some(80)).unwrap();
        assert!(s.is_closed_tour(4));
        assert_eq!(s.cost, 80);
    }

    #[test]
    fn every_chromosome_satisfies_the_cached_cost_invariant() {
        let m = scenario_a();
        let mut rng = rand::thread_rng();
        let base = vec![0usize, 1, 2, 3];
        for _ in 0..20 {
            let tour = random_swap_tour(&m, &base, &mut rng).unwrap();
            let c = Chromosome::from_tour(&m, &tour, 1).unwrap();
            assert_eq!(c.cost(), m.tour_cost(&c.tour()).unwrap());
        }
    }
}
