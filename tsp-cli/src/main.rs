//! `tsp-cli`: run a single algorithm against a config-described instance, or
//! sweep the built-in measurement plans (§6.4). `anyhow` is the error type
//! at this application boundary - every layer's typed `thiserror` error is
//! folded into an `anyhow::Error` tagged with its category, so `main`
//! prints one `<Category> Error: <message>` line to stderr and exits 1.

mod args;
mod dispatch;
mod measure;

use std::path::Path;
use std::process::ExitCode;

use anyhow::anyhow;
use args::Mode;
use log::info;
use tsp_common::Solution;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let argv = std::env::args().skip(1);
    let mode = args::parse(argv).map_err(|e| anyhow!("Argument Error: {e}"))?;

    match mode {
        Mode::Run { config, algorithm, json } => run_single(&config, algorithm, json),
        Mode::Measure { verbose, algorithms } => run_measure(&algorithms, verbose),
    }
}

fn run_single(config: &Path, algorithm: args::Algorithm, json: bool) -> anyhow::Result<()> {
    info!("loading config {}", config.display());
    let instance = tsp_io::load_instance(config).map_err(|e| anyhow!("Config Error: {e}"))?;

    info!("running {}", algorithm.name());
    let solution = dispatch::run(algorithm, &instance, None).map_err(|e| anyhow!("Algorithm Error: {e}"))?;

    print_solution(&solution, json);
    Ok(())
}

fn run_measure(algorithms: &[args::Algorithm], verbose: bool) -> anyhow::Result<()> {
    let out_dir = Path::new("measurements");
    measure::run(algorithms, verbose, out_dir).map_err(|e| anyhow!("Measure Error: {e}"))
}

fn print_solution(solution: &Solution, json: bool) {
    if json {
        match serde_json::to_string(solution) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("warning: could not serialize solution as JSON: {e}"),
        }
    } else {
        let path = solution.path.iter().map(usize::to_string).collect::<Vec<_>>().join(" -> ");
        println!("cost: {}\npath: {}", solution.cost, path);
    }
}
