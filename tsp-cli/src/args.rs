//! Command-line argument parsing (§6.4): `clap` derive over a pre-normalized
//! argument vector, translating spec.md's legacy single-dash algorithm
//! selectors (`-bf`, `-nn`, ...) into clap long flags before `clap` ever
//! sees them, so `tsp-cli --config=foo.ini -lc` parses exactly as spec.md
//! prescribes while the parser itself stays ordinary derive-`clap`.

use std::path::PathBuf;

use clap::Parser;
use tsp_common::ArgError;

/// The eight single-dash algorithm selectors spec.md §6 names, each mapped
/// to the long flag name `clap` actually parses.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-bf", "--bf"),
    ("-nn", "--nn"),
    ("-r", "--r"),
    ("-lc", "--lc"),
    ("-bb", "--bb"),
    ("-bd", "--bd"),
    ("-ts", "--ts"),
    ("-g", "--g"),
];

/// Rewrite every legacy single-dash algorithm flag in `raw` to its clap long
/// form. Any argument not matching one of [`LEGACY_FLAGS`] verbatim (a
/// `--config=...` option, `--measure`, `--verbose`, or an already-long flag)
/// passes through unchanged.
pub fn normalize(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    raw.into_iter()
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| *legacy == arg)
                .map(|(_, long)| long.to_string())
                .unwrap_or(arg)
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(name = "tsp-cli", about = "TSP solver: run one algorithm, or sweep a measurement plan")]
pub struct RawArgs {
    /// Path to the INI configuration file (§6.2).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run every requested algorithm across the built-in sweep plans
    /// instead of a single config-driven run.
    #[arg(long)]
    pub measure: bool,

    /// Print a heartbeat (via each algorithm's tick callback) while running.
    #[arg(long)]
    pub verbose: bool,

    /// Single-run mode only: print the solution as JSON instead of a
    /// human-readable line.
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub bf: bool,
    #[arg(long)]
    pub nn: bool,
    #[arg(long)]
    pub r: bool,
    #[arg(long)]
    pub lc: bool,
    #[arg(long)]
    pub bb: bool,
    #[arg(long)]
    pub bd: bool,
    #[arg(long)]
    pub ts: bool,
    #[arg(long)]
    pub g: bool,
}

/// One of the seven (eight counting the three B&B traversals separately)
/// algorithms dispatchable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BruteForce,
    NearestNeighbor,
    Random,
    BranchAndBoundLc,
    BranchAndBoundBfs,
    BranchAndBoundDfs,
    TabuSearch,
    Genetic,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "bf",
            Algorithm::NearestNeighbor => "nn",
            Algorithm::Random => "r",
            Algorithm::BranchAndBoundLc => "lc",
            Algorithm::BranchAndBoundBfs => "bb",
            Algorithm::BranchAndBoundDfs => "bd",
            Algorithm::TabuSearch => "ts",
            Algorithm::Genetic => "g",
        }
    }
}

impl RawArgs {
    /// The algorithm flags set to `true`, in declaration order.
    fn selected(&self) -> Vec<Algorithm> {
        let flags: [(bool, Algorithm); 8] = [
            (self.bf, Algorithm::BruteForce),
            (self.nn, Algorithm::NearestNeighbor),
            (self.r, Algorithm::Random),
            (self.lc, Algorithm::BranchAndBoundLc),
            (self.bb, Algorithm::BranchAndBoundBfs),
            (self.bd, Algorithm::BranchAndBoundDfs),
            (self.ts, Algorithm::TabuSearch),
            (self.g, Algorithm::Genetic),
        ];
        flags.into_iter().filter(|(set, _)| *set).map(|(_, a)| a).collect()
    }
}

/// The two CLI modes of spec.md §6, already validated against
/// [`ArgError`]'s taxonomy.
pub enum Mode {
    Run { config: PathBuf, algorithm: Algorithm, json: bool },
    Measure { verbose: bool, algorithms: Vec<Algorithm> },
}

/// Parse and validate `argv` (excluding the program name) into a [`Mode`].
pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Mode, ArgError> {
    let normalized = normalize(argv);
    let raw = RawArgs::try_parse_from(std::iter::once("tsp-cli".to_string()).chain(normalized))
        .map_err(|e| ArgError::BadArg(e.to_string()))?;

    let selected = raw.selected();

    if raw.measure {
        if selected.is_empty() {
            return Err(ArgError::NoArg);
        }
        return Ok(Mode::Measure { verbose: raw.verbose, algorithms: selected });
    }

    let config = raw.config.ok_or(ArgError::NoArg)?;
    match selected.as_slice() {
        [] => Err(ArgError::NoArg),
        [single] => Ok(Mode::Run { config, algorithm: *single, json: raw.json }),
        _ => Err(ArgError::MultipleArg),
    }
}
