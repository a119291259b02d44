//! Cost matrices and the graph-shape metadata that accompanies them.

use serde::{Deserialize, Serialize};

/// Sentinel value marking an absent edge in a [`CostMatrix`].
pub const NO_EDGE: i64 = -1;

/// A square `NxN` cost matrix. `matrix[i][j] == NO_EDGE` means there is no
/// edge from vertex `i` to vertex `j`. Diagonal entries are ignored by every
/// algorithm and not required to be `NO_EDGE`, though instance files
/// conventionally set them so.
///
/// Immutable once built: algorithms that need to mutate a reduced copy of
/// the matrix (branch & bound) always clone first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMatrix {
    n: usize,
    data: Vec<Vec<i64>>,
}

impl CostMatrix {
    /// Build a cost matrix from a square grid of edge costs.
    ///
    /// Returns `None` if the grid isn't square (every row must have exactly
    /// `data.len()` columns).
    pub fn new(data: Vec<Vec<i64>>) -> Option<Self> {
        let n = data.len();
        if data.iter().any(|row| row.len() != n) {
            return None;
        }
        Some(Self { n, data })
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`, or `None` if the edge is absent.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> Option<i64> {
        match self.data[from][to] {
            NO_EDGE => None,
            c => Some(c),
        }
    }

    /// Raw entry, `NO_EDGE` included, without the `Option` wrapping.
    #[inline]
    pub fn raw(&self, from: usize, to: usize) -> i64 {
        self.data[from][to]
    }

    /// Set a raw entry. Used by algorithms that build working copies of the
    /// matrix (branch & bound's row/column reduction).
    #[inline]
    pub fn set_raw(&mut self, from: usize, to: usize, value: i64) {
        self.data[from][to] = value;
    }

    /// Feasible outgoing neighbors of `from`, in ascending vertex order.
    pub fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        (0..self.n)
            .filter(move |&to| to != from)
            .filter_map(move |to| self.cost(from, to).map(|c| (to, c)))
    }

    /// Sum of edge costs along a closed tour `path` (`path[0] == path[last]`).
    /// Returns `None` if any consecutive pair has no edge.
    pub fn tour_cost(&self, path: &[usize]) -> Option<i64> {
        path.windows(2)
            .try_fold(0i64, |acc, w| self.cost(w[0], w[1]).map(|c| acc + c))
    }
}

/// Declared shape of the graph an [`CostMatrix`] represents.
///
/// When both fields are `true`, rotational symmetry means every algorithm
/// only needs to enumerate vertex 0 as a tour start; otherwise every vertex
/// must be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphInfo {
    pub symmetric: bool,
    pub full: bool,
}

impl GraphInfo {
    /// Starting vertices an algorithm must enumerate given this graph shape.
    pub fn start_vertices(&self, n: usize) -> Vec<usize> {
        if self.symmetric && self.full {
            vec![0]
        } else {
            (0..n).collect()
        }
    }
}
