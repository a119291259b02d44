//! Breadth-first branch & bound (§4.5): explores the search tree level by
//! level. Each node is `{ path, cost_so_far }` - no matrix, no reduction,
//! just a running total and a cost-based incumbent prune. Simpler and
//! more memory-hungry per level than `lc`, but must agree with it and `bf`
//! on the optimal cost (P3).

use std::collections::VecDeque;

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

use crate::{nn, tick, Tick};

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

    let mut incumbent = nn::run_with_tick(matrix, graph_info, optimal, tick_cb).ok();

    let mut queue: VecDeque<Vec<usize>> = VecDeque::new();
    for start in graph_info.start_vertices(n) {
        queue.push_back(vec![start]);
    }

    while let Some(path) = queue.pop_front() {
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
        for (next, _) in matrix.neighbors(last) {
            if path.contains(&next) {
                continue;
            }
            let mut child = path.clone();
            child.push(next);
            queue.push_back(child);
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
