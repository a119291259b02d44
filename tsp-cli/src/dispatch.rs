//! Algorithm dispatch (§2, §9): a plain tagged match from [`Algorithm`] to
//! the `tsp-algo` function it names - no trait object, no vtable, per §9's
//! explicit rejection of a polymorphic interface at this boundary.

use tsp_algo::{bb, bf, gen, nn, rnd, ts};
use tsp_common::{AlgorithmError, AlgorithmResult, Instance};

use crate::args::Algorithm;

/// Run `algorithm` against `instance`, reporting progress through `tick`.
pub fn run(algorithm: Algorithm, instance: &Instance, tick: Option<&dyn Fn()>) -> AlgorithmResult {
    let matrix = &instance.matrix;
    let graph_info = &instance.graph_info;
    let optimal = instance.optimal_cost();

    match algorithm {
        Algorithm::BruteForce => bf::run_with_tick(matrix, graph_info, tick),
        Algorithm::NearestNeighbor => nn::run_with_tick(matrix, graph_info, optimal, tick),
        Algorithm::Random => {
            let params = instance
                .params
                .random
                .ok_or_else(|| AlgorithmError::InvalidParam("missing [random] section".into()))?;
            rnd::run_with_tick(matrix, params.millis, tick)
        }
        Algorithm::BranchAndBoundLc => bb::lc::run_with_tick(matrix, graph_info, optimal, tick),
        Algorithm::BranchAndBoundBfs => bb::bfs::run_with_tick(matrix, graph_info, optimal, tick),
        Algorithm::BranchAndBoundDfs => bb::dfs::run_with_tick(matrix, graph_info, optimal, tick),
        Algorithm::TabuSearch => {
            let params = instance
                .params
                .tabu_search
                .ok_or_else(|| AlgorithmError::InvalidParam("missing [tabu_search] section".into()))?;
            ts::run_with_tick(matrix, graph_info, &params, optimal, tick)
        }
        Algorithm::Genetic => {
            let params = instance
                .params
                .genetic
                .ok_or_else(|| AlgorithmError::InvalidParam("missing [genetic] section".into()))?;
            gen::run_with_tick(matrix, graph_info, &params, optimal, tick)
        }
    }
}
