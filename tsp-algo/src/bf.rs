//! Brute force (§4.1): exact optimum via pruned enumeration of partial
//! paths. Simplest of the three exact algorithms; also the slowest, so it
//! exists here mostly as an independent cross-check for B&B (P3).

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

use crate::{tick, Tick};

/// Find a minimum-cost Hamiltonian cycle by exhaustive, cost-pruned search.
pub fn run(matrix: &CostMatrix, graph_info: &GraphInfo) -> AlgorithmResult {
    run_with_tick(matrix, graph_info, None)
}

pub fn run_with_tick(matrix: &CostMatrix, graph_info: &GraphInfo, tick_cb: Tick<'_>) -> AlgorithmResult {
    let n = matrix.n();
    if n == 1 {
        return Ok(Solution::new(vec![0], 0));
    }

    let mut best: Option<Solution> = None;
    for start in graph_info.start_vertices(n) {
        let mut used = vec![false; n];
        used[start] = true;
        let mut path = vec![start];
        search(matrix, n, start, &mut used, &mut path, 0, &mut best, tick_cb);
    }

    best.ok_or(AlgorithmError::NoPath)
}

#[allow(clippy::too_many_arguments)]
fn search(
    matrix: &CostMatrix,
    n: usize,
    start: usize,
    used: &mut [bool],
    path: &mut Vec<usize>,
    cost_so_far: i64,
    best: &mut Option<Solution>,
    tick_cb: Tick<'_>,
) {
    tick(tick_cb);

    if path.len() == n {
        if let Some(close_cost) = matrix.cost(*path.last().unwrap(), start) {
            let total = cost_so_far + close_cost;
            if best.as_ref().map_or(true, |b| total < b.cost) {
                log::trace!("bf: new incumbent cost {total}");
                let mut full_path = path.clone();
                full_path.push(start);
                *best = Some(Solution::new(full_path, total));
            }
        }
        return;
    }

    let last = *path.last().unwrap();
    for (next, edge_cost) in matrix.neighbors(last) {
        if used[next] {
            continue;
        }
        let new_cost = cost_so_far + edge_cost;
        if let Some(b) = best {
            if new_cost >= b.cost {
                continue;
            }
        }
        used[next] = true;
        path.push(next);
        search(matrix, n, start, used, path, new_cost, best, tick_cb);
        path.pop();
        used[next] = false;
    }
}
