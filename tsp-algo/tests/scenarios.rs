//! End-to-end scenarios (spec.md §8): fixed small matrices that every
//! algorithm is checked against directly, cross-checking the exact
//! algorithms against each other (P3) and the heuristics against the
//! known optimum (P4).

use tsp_algo::{bb, bf, gen, nn, rnd, ts};
use tsp_common::{AlgorithmError, CostMatrix, GraphInfo, ParamGenetic, ParamTabuSearch};

fn scenario_a() -> (CostMatrix, GraphInfo) {
    let m = CostMatrix::new(vec![
        vec![-1, 10, 15, 20],
        vec![10, -1, 35, 25],
        vec![15, 35, -1, 30],
        vec![20, 25, 30, -1],
    ])
    .unwrap();
    (m, GraphInfo { symmetric: true, full: true })
}

fn scenario_b() -> (CostMatrix, GraphInfo) {
    let m = CostMatrix::new(vec![vec![-1, 5, 10], vec![6, -1, 2], vec![3, 7, -1]]).unwrap();
    (m, GraphInfo { symmetric: false, full: true })
}

fn scenario_c() -> (CostMatrix, GraphInfo) {
    let m = CostMatrix::new(vec![vec![-1, 5, 10], vec![5, -1, 7], vec![-1, -1, -1]]).unwrap();
    (m, GraphInfo { symmetric: false, full: false })
}

fn scenario_d() -> (CostMatrix, GraphInfo) {
    (CostMatrix::new(vec![vec![-1]]).unwrap(), GraphInfo { symmetric: true, full: true })
}

#[test]
fn scenario_a_exact_algorithms_agree_on_80() {
    let (m, g) = scenario_a();
    assert_eq!(bf::run(&m, &g).unwrap().cost, 80);
    assert_eq!(bb::lc::run(&m, &g, None).unwrap().cost, 80);
    assert_eq!(bb::bfs::run(&m, &g, None).unwrap().cost, 80);
    assert_eq!(bb::dfs::run(&m, &g, None).unwrap().cost, 80);
}

#[test]
fn scenario_a_nearest_neighbor_matches_optimum_here() {
    let (m, g) = scenario_a();
    let s = nn::run(&m, &g, None).unwrap();
    assert_eq!(s.cost, 80);
    assert_eq!(s.path, vec![0, 1, 3, 2, 0]);
}

#[test]
fn scenario_b_exact_algorithms_agree_on_10() {
    let (m, g) = scenario_b();
    assert_eq!(bf::run(&m, &g).unwrap().cost, 10);
    assert_eq!(bb::lc::run(&m, &g, None).unwrap().cost, 10);
    assert_eq!(bb::bfs::run(&m, &g, None).unwrap().cost, 10);
    assert_eq!(bb::dfs::run(&m, &g, None).unwrap().cost, 10);
}

#[test]
fn scenario_c_no_hamiltonian_cycle_is_reported_by_every_algorithm() {
    let (m, g) = scenario_c();
    assert!(matches!(bf::run(&m, &g), Err(AlgorithmError::NoPath)));
    assert!(matches!(bb::lc::run(&m, &g, None), Err(AlgorithmError::NoPath)));
    assert!(matches!(bb::bfs::run(&m, &g, None), Err(AlgorithmError::NoPath)));
    assert!(matches!(bb::dfs::run(&m, &g, None), Err(AlgorithmError::NoPath)));
    assert!(matches!(nn::run(&m, &g, None), Err(AlgorithmError::NoPath)));
}

#[test]
fn scenario_d_single_vertex_is_the_trivial_tour() {
    let (m, g) = scenario_d();
    let s = bf::run(&m, &g).unwrap();
    assert_eq!(s.path, vec![0]);
    assert_eq!(s.cost, 0);
}

#[test]
fn scenario_e_tabu_search_reaches_scenario_a_optimum() {
    let (m, g) = scenario_a();
    let params = ParamTabuSearch { itr: 16, max_itr_no_improve: 16, tabu_itr: 3 };
    let s = ts::run(&m, &g, &params, Some(80)).unwrap();
    assert!(s.is_closed_tour(4));
    assert_eq!(s.cost, 80);
}

#[test]
fn scenario_f_genetic_population_never_regresses_past_nearest_neighbor() {
    let (m, g) = scenario_a();
    let nn_cost = nn::run(&m, &g, None).unwrap().cost;
    let params = ParamGenetic {
        itr: 1,
        population_size: 10,
        children_per_itr: 10,
        max_children_per_pair: 2,
        max_v_count_crossover: 1,
        mutations_per_1000: 0,
    };
    let s = gen::run(&m, &g, &params, None).unwrap();
    assert!(s.cost <= nn_cost);
    assert!(s.is_closed_tour(4));
}

#[test]
fn random_sampler_finds_a_tour_given_enough_time() {
    let (m, g) = scenario_a();
    let s = rnd::run(&m, 50).unwrap();
    assert!(s.is_closed_tour(4));
    assert!(s.cost >= 80);
}

#[test]
fn every_returned_solution_recomputes_to_its_cached_cost() {
    for (m, g) in [scenario_a(), scenario_b()] {
        for s in [bf::run(&m, &g), bb::lc::run(&m, &g, None), bb::bfs::run(&m, &g, None), bb::dfs::run(&m, &g, None)] {
            let s = s.unwrap();
            assert_eq!(s.recomputed_cost(&m), Some(s.cost));
        }
    }
}
