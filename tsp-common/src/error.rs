//! The disjoint error taxonomy shared by every crate in the workspace.
//!
//! Each category below corresponds 1:1 to a layer of the system: algorithms
//! fail with [`AlgorithmError`], the instance-file reader with
//! [`InputError`], the config loader with [`ConfigError`], argument parsing
//! with [`ArgError`], and the measurement harness with [`MeasureError`].
//! Categories are never merged - a caller always knows which layer failed.

use std::io;

/// Failure from running a search algorithm.
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    /// No feasible Hamiltonian cycle exists for the given matrix.
    #[error("no Hamiltonian cycle exists for this instance")]
    NoPath,
    /// A caller-supplied numeric parameter was out of its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

/// Failure from reading a plain-text cost-matrix instance file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read instance file: {0}")]
    BadRead(#[from] io::Error),
    #[error("malformed instance data: {0}")]
    BadData(String),
}

/// Failure from reading and parsing an INI config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    BadRead(#[from] io::Error),
    #[error("invalid config: {0}")]
    BadConfig(String),
    /// The config parsed but the instance file it names could not be loaded.
    #[error("could not proceed: {0}")]
    CanNotProceed(#[from] Box<InputError>),
}

/// Failure from parsing command-line arguments.
#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("no algorithm or mode specified")]
    NoArg,
    #[error("multiple algorithms specified for a single run")]
    MultipleArg,
    #[error("bad argument: {0}")]
    BadArg(String),
}

/// Failure from the measurement harness, wrapping either layer it drives.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
    #[error("could not write report file: {0}")]
    File(#[from] io::Error),
}

/// Result of running a search algorithm to completion.
pub type AlgorithmResult = Result<crate::solution::Solution, AlgorithmError>;
