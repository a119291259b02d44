//! External collaborators of the tsp-solver core (§6): the cost-matrix
//! instance reader, the INI configuration loader, and the semicolon-
//! delimited CSV measurement-report writer.

pub mod config;
pub mod instance_file;
pub mod report;

pub use config::load_instance;
pub use instance_file::read_matrix;
pub use report::{Error, ReportWriter};
