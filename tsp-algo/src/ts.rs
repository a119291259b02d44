//! Tabu search (§4.6): local search over city-swap neighbors with a
//! short-term memory of recently-undone swaps, seeded from a
//! nearest-neighbor tour. Each iteration evaluates every swap's cost delta
//! in O(1) by touching only the (at most four) tour edges incident to the
//! two swapped positions, rather than recomputing the whole tour cost.

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, ParamTabuSearch, Solution};

use crate::{nn, tick, Tick};

pub fn run(
    matrix: &CostMatrix,
    graph_info: &GraphInfo,
    params: &ParamTabuSearch,
    optimal: Option<i64>,
) -> AlgorithmResult {
    run_with_tick(matrix, graph_info, params, optimal, None)
}

pub fn run_with_tick(
    matrix: &CostMatrix,
    graph_info: &GraphInfo,
    params: &ParamTabuSearch,
    optimal: Option<i64>,
    tick_cb: Tick<'_>,
) -> AlgorithmResult {
    params.validate()?;

    let n = matrix.n();
    if n == 1 {
        return Ok(Solution::new(vec![0], 0));
    }

    let seed = nn::run_with_tick(matrix, graph_info, optimal, tick_cb)?;
    let mut path = seed.path[..n].to_vec();
    let mut cost = matrix.tour_cost(&seed.path).ok_or(AlgorithmError::NoPath)?;

    let mut best_path = path.clone();
    let mut best_cost = cost;
    // tabu_until[a][b]: iteration up to which swapping cities a and b is
    // forbidden (unless the move passes the aspiration check below).
    let mut tabu_until = vec![vec![0u32; n]; n];

    let mut no_improve = 0u32;
    for itr in 1..=params.itr {
        if no_improve >= params.max_itr_no_improve {
            break;
        }
        tick(tick_cb);

        let mut best_candidate: Option<(usize, usize, i64)> = None;
        for i in 0..n {
            for j in (i + 1)..n {
                let Some(delta) = swap_delta(matrix, &path, i, j) else { continue };
                let candidate_cost = cost + delta;
                let tabu = tabu_until[path[i]][path[j]] > itr;
                let aspirated = candidate_cost < best_cost;
                if tabu && !aspirated {
                    continue;
                }
                if best_candidate.map_or(true, |(_, _, best_delta)| delta < best_delta) {
                    best_candidate = Some((i, j, delta));
                }
            }
        }

        let Some((i, j, delta)) = best_candidate else {
            // Every neighbor is tabu and none aspirates: stuck.
            break;
        };

        let city_a = path[i];
        let city_b = path[j];
        path.swap(i, j);
        cost += delta;
        tabu_until[city_a][city_b] = itr + params.tabu_itr;
        tabu_until[city_b][city_a] = itr + params.tabu_itr;

        if cost < best_cost {
            log::debug!("ts: iteration {itr} improved cost to {cost}");
            best_cost = cost;
            best_path = path.clone();
            no_improve = 0;
            if optimal == Some(best_cost) {
                break;
            }
        } else {
            no_improve += 1;
        }
    }

    let mut full_path = best_path;
    full_path.push(full_path[0]);
    Ok(Solution::new(full_path, best_cost))
}

/// Cost delta of swapping the cities at positions `i` and `j` (`i < j`) in
/// the cyclic tour `path`. Only the tour edges touching positions `i` or
/// `j` can change, so the affected-edge set has at most four members
/// (fewer when the positions are adjacent or wrap around the cycle).
/// Genuinely O(1): the post-swap vertex at each affected position is read
/// off `path[i]`/`path[j]` directly, with no full-path clone and no
/// allocation. Returns `None` if the swap would use an absent edge.
fn swap_delta(matrix: &CostMatrix, path: &[usize], i: usize, j: usize) -> Option<i64> {
    let n = path.len();

    let mut positions = [(i + n - 1) % n, i, (j + n - 1) % n, j];
    positions.sort_unstable();

    let vi = path[i];
    let vj = path[j];
    let vertex_at = |pos: usize| if pos == i { vj } else if pos == j { vi } else { path[pos] };

    let mut before = 0i64;
    let mut after = 0i64;
    let mut last = None;
    for &p in positions.iter() {
        if last == Some(p) {
            continue;
        }
        last = Some(p);
        let next = (p + 1) % n;
        before += matrix.cost(path[p], path[next])?;
        after += matrix.cost(vertex_at(p), vertex_at(next))?;
    }

    Some(after - before)
}
