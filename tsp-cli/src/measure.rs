//! The `--measure` sweep driver (§6.5, §9): a single generic `measured_run`
//! adapter timing any algorithm closure, and a small set of named sweep
//! plans - one CSV report per selected algorithm - reproducing
//! `original_source/measure.cpp`'s cache-warm-then-record discipline
//! (2-3 warm-up runs, 5-10 recorded runs per data point, §6 of spec.md).
//!
//! `original_source/measure.cpp` additionally sweeps individual parameters
//! (`tabu_itr`, `population_size`, `mutations_per_1000`, ...) against a
//! fixed vertex count, each cascading into the next using a convergence
//! heuristic, and reads its instances from checked-in TSPLIB fixtures. This
//! harness reproduces the parameter-impact idea - one CSV per swept
//! parameter, vertex count held fixed, synthetic instances from
//! [`tsp_bench`] instead of TSPLIB files - without the cascading
//! convergence search, since nothing downstream of this harness consumes
//! a "locked-in best parameter" the way the original's later sweeps did.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_algo::{bb, bf, gen, nn, rnd, ts};
use tsp_bench::InstanceSpec;
use tsp_common::{AlgorithmError, AlgorithmResult, GraphInfo, MeasureError, ParamGenetic, ParamTabuSearch};
use tsp_io::report::{format_duration_micros, Error as MeasureGap};
use tsp_io::ReportWriter;

use crate::args::Algorithm;

const WARMUP_RUNS: u32 = 3;
const RECORDED_RUNS: u32 = 5;
const VERTEX_COUNTS: std::ops::Range<usize> = 5..20;
const MAX_EDGE_COST: i64 = 100;

const DEFAULT_RANDOM_MILLIS: u64 = 50;
const DEFAULT_TABU: ParamTabuSearch = ParamTabuSearch { itr: 500, max_itr_no_improve: 100, tabu_itr: 5 };
const DEFAULT_GENETIC: ParamGenetic = ParamGenetic {
    itr: 100,
    population_size: 20,
    children_per_itr: 10,
    max_children_per_pair: 3,
    max_v_count_crossover: 1,
    mutations_per_1000: 50,
};

/// Vertex count held fixed while a single parameter is swept.
const PARAM_SWEEP_N: usize = 10;
const TABU_ITR_VALUES: [u32; 6] = [1, 2, 3, 5, 8, 13];
const POPULATION_SIZE_VALUES: [u32; 5] = [5, 10, 20, 40, 80];
const MUTATIONS_PER_1000_VALUES: [u32; 5] = [0, 10, 50, 100, 200];

/// One timed invocation of an algorithm: its outcome and wall-clock cost.
pub struct MeasuredRun {
    pub result: AlgorithmResult,
    pub duration: Duration,
}

/// Time a single algorithm invocation. The generic adapter §9 calls for:
/// any `FnOnce() -> AlgorithmResult` closure works, so every algorithm in
/// the dispatch table shares this one wrapper instead of a per-algorithm one.
pub fn measured_run(f: impl FnOnce() -> AlgorithmResult) -> MeasuredRun {
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    MeasuredRun { result, duration }
}

/// Run the sweep plan for each selected algorithm, writing one CSV report
/// per algorithm into `out_dir`, plus a parameter-impact CSV per swept
/// parameter for TS and GEN.
pub fn run(algorithms: &[Algorithm], verbose: bool, out_dir: &Path) -> Result<(), MeasureError> {
    run_over(algorithms, verbose, out_dir, VERTEX_COUNTS)
}

fn run_over(
    algorithms: &[Algorithm],
    verbose: bool,
    out_dir: &Path,
    vertex_counts: std::ops::Range<usize>,
) -> Result<(), MeasureError> {
    std::fs::create_dir_all(out_dir)?;
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for &algorithm in algorithms {
        let path = out_dir.join(format!("measure_{}.csv", algorithm.name()));
        info!("measuring {} -> {}", algorithm.name(), path.display());
        sweep_one(algorithm, &path, verbose, &mut rng, vertex_counts.clone())?;

        match algorithm {
            Algorithm::TabuSearch => {
                let path = out_dir.join("measure_ts_tabu_itr.csv");
                info!("measuring {} tabu_itr impact -> {}", algorithm.name(), path.display());
                sweep_tabu_itr_impact(&path, &mut rng)?;
            }
            Algorithm::Genetic => {
                let path = out_dir.join("measure_gen_population_size.csv");
                info!("measuring {} population_size impact -> {}", algorithm.name(), path.display());
                sweep_population_size_impact(&path, &mut rng)?;

                let path = out_dir.join("measure_gen_mutations_per_1000.csv");
                info!("measuring {} mutations_per_1000 impact -> {}", algorithm.name(), path.display());
                sweep_mutations_per_1000_impact(&path, &mut rng)?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Hold vertex count fixed at [`PARAM_SWEEP_N`] and sweep `tabu_itr` across
/// [`TABU_ITR_VALUES`], one recorded run per value (§6.5's `tabu-search`
/// plan).
fn sweep_tabu_itr_impact(path: &Path, rng: &mut StdRng) -> Result<(), MeasureError> {
    let mut writer = ReportWriter::create(path, &["tabu_itr", "run", "computed_cost", "time_us"])?;
    let spec = InstanceSpec::full_asymmetric(PARAM_SWEEP_N, MAX_EDGE_COST);
    let (matrix, graph_info) = tsp_bench::generate(&spec, rng);

    for &tabu_itr in &TABU_ITR_VALUES {
        let params = ParamTabuSearch { tabu_itr, ..DEFAULT_TABU };
        for run_idx in 0..RECORDED_RUNS {
            let MeasuredRun { result, duration } =
                measured_run(|| ts::run_with_tick(&matrix, &graph_info, &params, None, None));
            match result {
                Ok(solution) => {
                    writer.write_row(&[
                        tabu_itr.to_string(),
                        run_idx.to_string(),
                        solution.cost.to_string(),
                        format_duration_micros(duration),
                    ])?;
                }
                Err(AlgorithmError::NoPath) => warn!("tabu_itr={tabu_itr} run={run_idx}: no tour found"),
                Err(e) => return Err(MeasureError::Algorithm(e)),
            }
        }
    }
    Ok(())
}

/// Hold vertex count fixed at [`PARAM_SWEEP_N`] and sweep `population_size`
/// across [`POPULATION_SIZE_VALUES`] (§6.5's `genetic` plan).
fn sweep_population_size_impact(path: &Path, rng: &mut StdRng) -> Result<(), MeasureError> {
    let mut writer = ReportWriter::create(path, &["population_size", "run", "computed_cost", "time_us"])?;
    let spec = InstanceSpec::full_asymmetric(PARAM_SWEEP_N, MAX_EDGE_COST);
    let (matrix, graph_info) = tsp_bench::generate(&spec, rng);

    for &population_size in &POPULATION_SIZE_VALUES {
        let params = ParamGenetic { population_size, ..DEFAULT_GENETIC };
        for run_idx in 0..RECORDED_RUNS {
            let MeasuredRun { result, duration } =
                measured_run(|| gen::run_with_tick(&matrix, &graph_info, &params, None, None));
            match result {
                Ok(solution) => {
                    writer.write_row(&[
                        population_size.to_string(),
                        run_idx.to_string(),
                        solution.cost.to_string(),
                        format_duration_micros(duration),
                    ])?;
                }
                Err(AlgorithmError::NoPath) => warn!("population_size={population_size} run={run_idx}: no tour found"),
                Err(e) => return Err(MeasureError::Algorithm(e)),
            }
        }
    }
    Ok(())
}

/// Hold vertex count fixed at [`PARAM_SWEEP_N`] and sweep `mutations_per_1000`
/// across [`MUTATIONS_PER_1000_VALUES`] (§6.5's `genetic` plan).
fn sweep_mutations_per_1000_impact(path: &Path, rng: &mut StdRng) -> Result<(), MeasureError> {
    let mut writer = ReportWriter::create(path, &["mutations_per_1000", "run", "computed_cost", "time_us"])?;
    let spec = InstanceSpec::full_asymmetric(PARAM_SWEEP_N, MAX_EDGE_COST);
    let (matrix, graph_info) = tsp_bench::generate(&spec, rng);

    for &mutations_per_1000 in &MUTATIONS_PER_1000_VALUES {
        let params = ParamGenetic { mutations_per_1000, ..DEFAULT_GENETIC };
        for run_idx in 0..RECORDED_RUNS {
            let MeasuredRun { result, duration } =
                measured_run(|| gen::run_with_tick(&matrix, &graph_info, &params, None, None));
            match result {
                Ok(solution) => {
                    writer.write_row(&[
                        mutations_per_1000.to_string(),
                        run_idx.to_string(),
                        solution.cost.to_string(),
                        format_duration_micros(duration),
                    ])?;
                }
                Err(AlgorithmError::NoPath) => {
                    warn!("mutations_per_1000={mutations_per_1000} run={run_idx}: no tour found")
                }
                Err(e) => return Err(MeasureError::Algorithm(e)),
            }
        }
    }
    Ok(())
}

fn sweep_one(
    algorithm: Algorithm,
    path: &Path,
    verbose: bool,
    rng: &mut StdRng,
    vertex_counts: std::ops::Range<usize>,
) -> Result<(), MeasureError> {
    let mut writer = ReportWriter::create(
        path,
        &["n", "run", "optimal_cost", "computed_cost", "time_us", "error_percent"],
    )?;

    for n in vertex_counts {
        let spec = sweep_instance_spec(algorithm, n);
        let (matrix, graph_info) = tsp_bench::generate(&spec, rng);

        // Cache-warming: run and discard, matching the original harness's
        // practice of priming CPU cache and allocator state before the
        // recorded runs.
        for _ in 0..WARMUP_RUNS {
            let _ = dispatch_for_measurement(algorithm, &matrix, &graph_info, None);
        }

        for run_idx in 0..RECORDED_RUNS {
            let tick: Option<&dyn Fn()> = if verbose { Some(&|| {}) } else { None };
            let MeasuredRun { result, duration } =
                measured_run(|| dispatch_for_measurement(algorithm, &matrix, &graph_info, tick));

            match result {
                Ok(solution) => {
                    let gap = MeasureGap::compute(solution.cost, None);
                    writer.write_row(&[
                        n.to_string(),
                        run_idx.to_string(),
                        String::new(),
                        solution.cost.to_string(),
                        format_duration_micros(duration),
                        gap.map(|g| format!("{:.2}", g.relative_percent)).unwrap_or_default(),
                    ])?;
                }
                Err(AlgorithmError::NoPath) => {
                    warn!("n={n} run={run_idx}: no Hamiltonian cycle in this sampled instance, skipping");
                }
                Err(e) => return Err(MeasureError::Algorithm(e)),
            }
        }
    }

    Ok(())
}

/// The synthetic instance class each algorithm's sweep draws from: exact
/// algorithms get a full+symmetric instance they're guaranteed a tour on;
/// the others explore the asymmetric case too.
fn sweep_instance_spec(algorithm: Algorithm, n: usize) -> InstanceSpec {
    match algorithm {
        Algorithm::BruteForce | Algorithm::BranchAndBoundLc | Algorithm::BranchAndBoundBfs | Algorithm::BranchAndBoundDfs => {
            InstanceSpec::full_symmetric(n, MAX_EDGE_COST)
        }
        Algorithm::NearestNeighbor | Algorithm::Random | Algorithm::TabuSearch | Algorithm::Genetic => {
            InstanceSpec::full_asymmetric(n, MAX_EDGE_COST)
        }
    }
}

fn dispatch_for_measurement(
    algorithm: Algorithm,
    matrix: &tsp_common::CostMatrix,
    graph_info: &GraphInfo,
    tick: Option<&dyn Fn()>,
) -> AlgorithmResult {
    match algorithm {
        Algorithm::BruteForce => bf::run_with_tick(matrix, graph_info, tick),
        Algorithm::NearestNeighbor => nn::run_with_tick(matrix, graph_info, None, tick),
        Algorithm::Random => rnd::run_with_tick(matrix, DEFAULT_RANDOM_MILLIS, tick),
        Algorithm::BranchAndBoundLc => bb::lc::run_with_tick(matrix, graph_info, None, tick),
        Algorithm::BranchAndBoundBfs => bb::bfs::run_with_tick(matrix, graph_info, None, tick),
        Algorithm::BranchAndBoundDfs => bb::dfs::run_with_tick(matrix, graph_info, None, tick),
        Algorithm::TabuSearch => ts::run_with_tick(matrix, graph_info, &DEFAULT_TABU, None, tick),
        Algorithm::Genetic => gen::run_with_tick(matrix, graph_info, &DEFAULT_GENETIC, None, tick),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_common::Solution;

    #[test]
    fn measured_run_captures_duration_and_result() {
        let m = measured_run(|| Ok(Solution::new(vec![0], 0)));
        assert!(m.result.is_ok());
        // Duration is always >= 0; nothing more to assert deterministically.
        assert!(m.duration.as_nanos() < Duration::from_secs(5).as_nanos());
    }

    #[test]
    fn sweep_writes_a_report_file_per_algorithm() {
        let dir = tempfile::tempdir().unwrap();
        // Keep this fast: only a couple of tiny instances, not the full sweep.
        run_over(&[Algorithm::BruteForce], false, dir.path(), 4..6).unwrap();
        assert!(dir.path().join("measure_bf.csv").exists());
    }

    #[test]
    fn tabu_search_sweep_writes_both_its_reports() {
        let dir = tempfile::tempdir().unwrap();
        run_over(&[Algorithm::TabuSearch], false, dir.path(), 4..5).unwrap();
        assert!(dir.path().join("measure_ts.csv").exists());
        assert!(dir.path().join("measure_ts_tabu_itr.csv").exists());
    }

    #[test]
    fn genetic_sweep_writes_both_parameter_impact_reports() {
        let dir = tempfile::tempdir().unwrap();
        run_over(&[Algorithm::Genetic], false, dir.path(), 4..5).unwrap();
        assert!(dir.path().join("measure_gen_population_size.csv").exists());
        assert!(dir.path().join("measure_gen_mutations_per_1000.csv").exists());
    }
}
