//! Tour representation: an ordered vertex sequence plus its cost.

use serde::{Deserialize, Serialize};

use crate::matrix::CostMatrix;

/// A path through the graph. For a closed tour, `path[0] == path[last]` and
/// every vertex in `0..n` appears exactly once in `path[..last]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<usize>,
    pub cost: i64,
}

impl Solution {
    pub fn new(path: Vec<usize>, cost: i64) -> Self {
        Self { path, cost }
    }

    /// True when `path` is a closed Hamiltonian tour over `n` vertices:
    /// length `n + 1`, first and last vertex equal, every other vertex
    /// appearing exactly once.
    pub fn is_closed_tour(&self, n: usize) -> bool {
        if n == 1 {
            return self.path == [0];
        }
        if self.path.len() != n + 1 || self.path.first() != self.path.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.path[..n] {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        seen.iter().all(|&s| s)
    }

    /// Recompute the cost from the path against `matrix`, independent of the
    /// cached `cost` field. Used to check invariant P1/P6/P7.
    pub fn recomputed_cost(&self, matrix: &CostMatrix) -> Option<i64> {
        if self.path.len() == 1 {
            return Some(0);
        }
        matrix.tour_cost(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex_is_closed_tour() {
        let s = Solution::new(vec![0], 0);
        assert!(s.is_closed_tour(1));
    }

    #[test]
    fn detects_missing_vertex() {
        let s = Solution::new(vec![0, 1, 0], 10);
        assert!(!s.is_closed_tour(3));
    }

    #[test]
    fn detects_repeated_vertex() {
        let s = Solution::new(vec![0, 1, 1, 0], 10);
        assert!(!s.is_closed_tour(3));
    }

    #[test]
    fn valid_closed_tour_scenario_b() {
        let s = Solution::new(vec![0, 1, 2, 0], 10);
        assert!(s.is_closed_tour(3));
    }

    #[test]
    fn round_trips_through_json() {
        let s = Solution::new(vec![0, 1, 3, 2, 0], 80);
        let text = serde_json::to_string(&s).unwrap();
        let back: Solution = serde_json::from_str(&text).unwrap();
        assert_eq!(s, back);
    }
}
