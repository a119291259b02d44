//! Depth-first branch & bound (§4.5): same `{ path, cost_so_far }` node
//! model as `bfs`, but a LIFO stack instead of a FIFO queue - dives to a
//! full tour before backtracking. Per §4.5, the incumbent starts at +∞ (no
//! NN seed) - pruning comes only from tours DFS finds itself along the way.
//! Must still agree with `bf` and `lc` on the optimal cost (P3).

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

use crate::{tick, Tick};

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

    let mut incumbent: Option<Solution> = None;

    let mut stack: Vec<Vec<usize>> = graph_info.start_vertices(n).into_iter().map(|v| vec![v]).collect();

    while let Some(path) = stack.pop() {
        tick(tick_cb);

        let Some(cost_so_far) = matrix.tour_cost(&path) else { continue };
        if let Some(inc) = &incumbent {
            if cost_so_far >= inc.cost {
                continue;
            }
        }

        if path.len() == n {
            let start_v = path[0];
            let mut full_path = path.clone();
            full_path.push(start_v);
            if let Some(total) = matrix.tour_cost(&full_path) {
                if incumbent.as_ref().map_or(true, |b| total < b.cost) {
                    incumbent = Some(Solution::new(full_path, total));
                    if optimal == Some(total) {
                        break;
                    }
                }
            }
            continue;
        }

        let last = *path.last().unwrap();
        // Push in descending vertex order so the stack pops ascending - a
        // readable, deterministic traversal order, not a correctness
        // requirement.
        let mut candidates: Vec<usize> = matrix
            .neighbors(last)
            .filter(|(next, _)| !path.contains(next))
            .map(|(next, _)| next)
            .collect();
        candidates.sort_unstable_by(|a, b| b.cmp(a));
        for next in candidates {
            let mut child = path.clone();
            child.push(next);
            stack.push(child);
        }
    }

    incumbent.ok_or(AlgorithmError::NoPath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex() {
        let m = CostMatrix::new(vec![vec![-1]]).unwrap();
        let g = GraphInfo { symmetric: true, full: true };
        assert_eq!(run(&m, &g, None).unwrap(), Solution::new(vec![0], 0));
    }

    #[test]
    fn scenario_a_matches_brute_force() {
        let m = CostMatrix::new(vec![
            vec![-1, 10, 15, 20],
            vec![10, -1, 35, 25],
            vec![15, 35, -1, 30],
            vec![20, 25, 30, -1],
        ])
        .unwrap();
        let g = GraphInfo { symmetric: true, full: true };
        assert_eq!(run(&m, &g, None).unwrap().cost, 80);
    }

    #[test]
    fn scenario_b_asymmetric_matches_brute_force() {
        let m = CostMatrix::new(vec![
            vec![-1, 5, 10],
            vec![6, -1, 2],
            vec![3, 7, -1],
        ])
        .unwrap();
        let g = GraphInfo { symmetric: false, full: true };
        assert_eq!(run(&m, &g, None).unwrap().cost, 10);
    }

    #[test]
    fn scenario_c_no_tour_fails() {
        let m = CostMatrix::new(vec![
            vec![-1, 5, 10],
            vec![5, -1, 7],
            vec![-1, -1, -1],
        ])
        .unwrap();
        let g = GraphInfo { symmetric: false, full: false };
        assert!(matches!(run(&m, &g, None), Err(AlgorithmError::NoPath)));
    }
}
