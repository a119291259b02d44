//! Random (§4.3): time-bounded probabilistic baseline. Builds random
//! Hamiltonian cycles until the wall-clock budget elapses, keeping the best
//! feasible tour found.

use std::time::{Duration, Instant};

use rand::prelude::SliceRandom;
use rand::Rng;
use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, Solution};

use crate::{tick, Tick};

/// Cap on retries for a single step before abandoning an in-progress attempt.
const RETRY_BOUND: u32 = 10_000;

/// Run random-restart tour construction for at least `time_ms` milliseconds.
pub fn run(matrix: &CostMatrix, time_ms: u64) -> AlgorithmResult {
    run_with_tick(matrix, time_ms, None)
}

pub fn run_with_tick(matrix: &CostMatrix, time_ms: u64, tick_cb: Tick<'_>) -> AlgorithmResult {
    if time_ms < 1 {
        return Err(AlgorithmError::InvalidParam(
            "random.millis must be >= 1".into(),
        ));
    }

    let n = matrix.n();
    if n == 1 {
        return Ok(Solution::new(vec![0], 0));
    }

    let deadline = Instant::now() + Duration::from_millis(time_ms);
    let mut rng = rand::thread_rng();
    let mut best: Option<Solution> = None;

    loop {
        tick(tick_cb);

        if let Some(solution) = attempt(matrix, n, &mut rng) {
            if best.as_ref().map_or(true, |b| solution.cost < b.cost) {
                best = Some(solution);
            }
        }

        if Instant::now() >= deadline {
            break;
        }
    }

    best.ok_or(AlgorithmError::NoPath)
}

fn attempt(matrix: &CostMatrix, n: usize, rng: &mut impl Rng) -> Option<Solution> {
    let start = rng.gen_range(0..n);
    let mut used = vec![false; n];
    used[start] = true;
    let mut path = vec![start];
    let mut cost = 0i64;

    while path.len() < n {
        let last = *path.last().unwrap();
        let mut candidates: Vec<usize> = (0..n).filter(|&v| !used[v]).collect();
        candidates.shuffle(rng);

        let mut retries = 0u32;
        let mut extended = false;
        for &candidate in &candidates {
            if retries >= RETRY_BOUND {
                break;
            }
            retries += 1;
            if let Some(edge_cost) = matrix.cost(last, candidate) {
                used[candidate] = true;
                path.push(candidate);
                cost += edge_cost;
                extended = true;
                break;
            }
        }

        if !extended {
            return None;
        }
    }

    let last = *path.last().unwrap();
    let close_cost = matrix.cost(last, start)?;
    path.push(start);
    Some(Solution::new(path, cost + close_cost))
}
