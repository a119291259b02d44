//! Cross-checks the three branch & bound traversals against brute force on
//! randomly generated small instances (P3): exact algorithms must always
//! agree on the optimal cost, not just on the two handwritten scenarios.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_algo::{bb, bf};
use tsp_bench::InstanceSpec;
use tsp_common::AlgorithmError;

#[test]
fn exact_algorithms_agree_on_random_small_instances() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = StdRng::seed_from_u64(42);
    for n in 2..=6 {
        for _ in 0..10 {
            let spec = InstanceSpec::full_symmetric(n, 50);
            let (matrix, graph_info) = tsp_bench::generate(&spec, &mut rng);

            let bf_cost = bf::run(&matrix, &graph_info);
            let lc_cost = bb::lc::run(&matrix, &graph_info, None);
            let bfs_cost = bb::bfs::run(&matrix, &graph_info, None);
            let dfs_cost = bb::dfs::run(&matrix, &graph_info, None);

            match bf_cost {
                Ok(s) => {
                    assert_eq!(lc_cost.unwrap().cost, s.cost);
                    assert_eq!(bfs_cost.unwrap().cost, s.cost);
                    assert_eq!(dfs_cost.unwrap().cost, s.cost);
                }
                Err(AlgorithmError::NoPath) => {
                    assert!(matches!(lc_cost, Err(AlgorithmError::NoPath)));
                    assert!(matches!(bfs_cost, Err(AlgorithmError::NoPath)));
                    assert!(matches!(dfs_cost, Err(AlgorithmError::NoPath)));
                }
                Err(e) => panic!("unexpected brute force error: {e}"),
            }
        }
    }
}
