//! Nearest neighbor (§4.2): fast constructive heuristic. Produces the
//! initial upper bound consumed by B&B-LC and the initial chromosome /
//! seed tour consumed by TS and GEN.

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

use crate::{tick, Tick};

/// Greedily extend a path to the nearest unused feasible vertex, branching
/// on ties, from every required starting vertex. Returns the best closed
/// tour found.
pub fn run(matrix: &CostMatrix, graph_info: &GraphInfo, optimal: Option<i64>) -> AlgorithmResult {
    run_with_tick(matrix, graph_info, optimal, None)
}

pub fn run_with_tick(
    matrix: &CostMatrix,
    graph_info: &GraphInfo,
    optimal: Option<i64>,
    tick_cb: Tick<'_>,
) -> AlgorithmResult {
    let n = matrix.n();
    if n == 1 {
        return Ok(Solution::new(vec![0], 0));
    }

    let mut best: Option<Solution> = None;
    let mut stop = false;

    for start in graph_info.start_vertices(n) {
        if stop {
            break;
        }
        let mut used = vec![false; n];
        used[start] = true;
        let mut path = vec![start];
        search(matrix, n, start, &mut used, &mut path, 0, &mut best, optimal, &mut stop, tick_cb);
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
    optimal: Option<i64>,
    stop: &mut bool,
    tick_cb: Tick<'_>,
) {
    if *stop {
        return;
    }
    tick(tick_cb);

    if path.len() == n {
        if let Some(close_cost) = matrix.cost(*path.last().unwrap(), start) {
            let total = cost_so_far + close_cost;
            if best.as_ref().map_or(true, |b| total < b.cost) {
                let mut full_path = path.clone();
                full_path.push(start);
                *best = Some(Solution::new(full_path, total));
            }
            if optimal == Some(total) {
                *stop = true;
            }
        }
        return;
    }

    let last = *path.last().unwrap();
    let min_cost = (0..n)
        .filter(|&v| !used[v])
        .filter_map(|v| matrix.cost(last, v))
        .min();

    let Some(min_cost) = min_cost else { return };

    for v in 0..n {
        if *stop {
            return;
        }
        if used[v] {
            continue;
        }
        if matrix.cost(last, v) != Some(min_cost) {
            continue;
        }
        used[v] = true;
        path.push(v);
        search(matrix, n, start, used, path, cost_so_far + min_cost, best, optimal, stop, tick_cb);
        path.pop();
        used[v] = false;
    }
}
