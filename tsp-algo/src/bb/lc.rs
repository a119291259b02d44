//! Least-cost branch & bound (§4.4): best-first search over partial tours,
//! ordered by a matrix-reduction lower bound. Nodes store only `path` and
//! `lower_bound` - never a matrix - and the reduced matrix at a node is
//! reconstructed by replaying its path from the root whenever the node is
//! popped. This trades CPU for memory: O(N) per queued node instead of
//! O(N^2), at the cost of re-deriving the matrix on every pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

use crate::reduce::{mark_used, reduce};
use crate::{nn, tick, Tick};

/// Find the optimal tour by best-first branch & bound with a reduced-matrix
/// lower bound, seeded with a nearest-neighbor incumbent.
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

    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut seq = 0u64;
    for start in graph_info.start_vertices(n) {
        let (_, bound) = trace(matrix, &[start]);
        if incumbent.as_ref().map_or(true, |b| bound < b.cost) {
            heap.push(QueueEntry { lower_bound: bound, seq, path: vec![start] });
            seq += 1;
        }
    }

    while let Some(entry) = heap.pop() {
        tick(tick_cb);

        if let Some(inc) = &incumbent {
            if entry.lower_bound >= inc.cost {
                continue;
            }
        }

        let (reduced, bound) = trace(matrix, &entry.path);
        debug_assert_eq!(bound, entry.lower_bound);

        if entry.path.len() == n {
            let start_v = entry.path[0];
            let mut full_path = entry.path.clone();
            full_path.push(start_v);
            // The closing edge was never committed as a branch above, so
            // read the real cost back from the original matrix rather than
            // the lower-bound accounting.
            if let Some(exact) = matrix.tour_cost(&full_path) {
                if incumbent.as_ref().map_or(true, |b| exact < b.cost) {
                    log::debug!("bb-lc: new incumbent cost {exact}, queue depth {}", heap.len());
                    incumbent = Some(Solution::new(full_path, exact));
                    if optimal == Some(exact) {
                        break;
                    }
                }
            }
            continue;
        }

        let last = *entry.path.last().unwrap();
        for to in 0..n {
            if entry.path.contains(&to) {
                continue;
            }
            let Some(edge_cost) = reduced.cost(last, to) else { continue };
            let mut child_matrix = reduced.clone();
            mark_used(&mut child_matrix, last, to);
            let child_bound = bound + edge_cost + reduce(&mut child_matrix);
            if incumbent.as_ref().map_or(true, |b| child_bound < b.cost) {
                let mut child_path = entry.path.clone();
                child_path.push(to);
                heap.push(QueueEntry { lower_bound: child_bound, seq, path: child_path });
                seq += 1;
            }
        }
    }

    incumbent.ok_or(AlgorithmError::NoPath)
}

/// Replay `path` from the pristine `root` matrix, applying one matrix
/// reduction and one edge commitment per step, and return the resulting
/// reduced matrix together with the accumulated lower bound.
fn trace(root: &CostMatrix, path: &[usize]) -> (CostMatrix, i64) {
    let mut m = root.clone();
    let mut bound = reduce(&mut m);

    for w in path.windows(2) {
        let (from, to) = (w[0], w[1]);
        let edge_cost = m.cost(from, to).unwrap_or(0);
        mark_used(&mut m, from, to);
        bound += edge_cost;
        bound += reduce(&mut m);
    }

    (m, bound)
}

struct QueueEntry {
    lower_bound: i64,
    seq: u64,
    path: Vec<usize>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.lower_bound == other.lower_bound && self.seq == other.seq
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap; reverse so the lowest bound (and, on a
        // tie, the earliest-pushed node) pops first.
        other
            .lower_bound
            .cmp(&self.lower_bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
