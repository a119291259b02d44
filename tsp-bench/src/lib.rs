//! Synthetic TSP instance generation for the measurement harness's
//! parameter sweeps (SPEC_FULL.md §6.5) and for integration tests across the
//! workspace. Grounded on `original_source/measure.cpp`'s instance classes:
//! full+symmetric, full+asymmetric, and partial (edges probabilistically
//! dropped) graphs, each driven by the same uniform-cost sampling.

use rand::Rng;
use tsp_common::{CostMatrix, GraphInfo};

/// Parameters describing one class of synthetic instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceSpec {
    /// Vertex count.
    pub n: usize,
    /// Sample a symmetric cost matrix (`cost(i, j) == cost(j, i)`).
    pub symmetric: bool,
    /// Every off-diagonal edge present (no `NO_EDGE` entries).
    pub full: bool,
    /// Inclusive upper bound on a sampled edge cost; costs are sampled from
    /// `1..=max_cost`.
    pub max_cost: i64,
    /// When `full` is false, the independent probability that any given
    /// edge survives (remains present rather than becoming `NO_EDGE`).
    pub edge_probability: f64,
}

impl InstanceSpec {
    /// A fully connected, symmetric instance - the simplest class, and the
    /// one every exact algorithm is guaranteed a tour on.
    pub fn full_symmetric(n: usize, max_cost: i64) -> Self {
        Self { n, symmetric: true, full: true, max_cost, edge_probability: 1.0 }
    }

    /// A fully connected, asymmetric instance (`cost(i, j)` and `cost(j, i)`
    /// sampled independently).
    pub fn full_asymmetric(n: usize, max_cost: i64) -> Self {
        Self { n, symmetric: false, full: true, max_cost, edge_probability: 1.0 }
    }

    /// A partial, asymmetric instance: each edge is independently dropped
    /// with probability `1 - edge_probability`. May have no Hamiltonian
    /// cycle at all - callers sweeping this class must tolerate `NoPath`.
    pub fn partial(n: usize, max_cost: i64, edge_probability: f64) -> Self {
        Self { n, symmetric: false, full: false, max_cost, edge_probability }
    }
}

/// Sample a [`CostMatrix`] and its matching [`GraphInfo`] from `spec`.
pub fn generate(spec: &InstanceSpec, rng: &mut impl Rng) -> (CostMatrix, GraphInfo) {
    let n = spec.n;
    let mut data = vec![vec![tsp_common::NO_EDGE; n]; n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if spec.symmetric && j < i {
                data[i][j] = data[j][i];
                continue;
            }
            let present = spec.full || rng.gen_bool(spec.edge_probability);
            if present {
                data[i][j] = rng.gen_range(1..=spec.max_cost);
            }
        }
    }

    let matrix = CostMatrix::new(data).expect("generated grid is always square");
    let graph_info = GraphInfo { symmetric: spec.symmetric, full: spec.full };
    (matrix, graph_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_symmetric_has_no_absent_edges_and_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(1);
        let (m, info) = generate(&InstanceSpec::full_symmetric(6, 50), &mut rng);
        assert!(info.full && info.symmetric);
        for i in 0..6 {
            for j in 0..6 {
                if i == j {
                    continue;
                }
                assert!(m.cost(i, j).is_some());
                assert_eq!(m.cost(i, j), m.cost(j, i));
            }
        }
    }

    #[test]
    fn full_asymmetric_has_no_absent_edges() {
        let mut rng = StdRng::seed_from_u64(2);
        let (m, info) = generate(&InstanceSpec::full_asymmetric(5, 20), &mut rng);
        assert!(info.full && !info.symmetric);
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    assert!(m.cost(i, j).is_some());
                }
            }
        }
    }

    #[test]
    fn partial_with_zero_probability_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let (m, info) = generate(&InstanceSpec::partial(5, 20, 0.0), &mut rng);
        assert!(!info.full);
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    assert!(m.cost(i, j).is_none());
                }
            }
        }
    }

    #[test]
    fn costs_stay_within_declared_bound() {
        let mut rng = StdRng::seed_from_u64(4);
        let (m, _) = generate(&InstanceSpec::full_asymmetric(8, 30), &mut rng);
        for i in 0..8 {
            for j in 0..8 {
                if let Some(c) = m.cost(i, j) {
                    assert!((1..=30).contains(&c));
                }
            }
        }
    }
}
