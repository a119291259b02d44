//! A fully loaded problem instance: matrix, graph shape, optional known
//! optimum, and algorithm parameters.

use serde::{Deserialize, Serialize};

use crate::matrix::{CostMatrix, GraphInfo};
use crate::params::Params;
use crate::solution::Solution;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub matrix: CostMatrix,
    pub graph_info: GraphInfo,
    /// The known optimum, if the config supplied one. Algorithms MAY use
    /// this to early-exit but must never rely on it for correctness.
    pub optimal: Option<Solution>,
    pub params: Params,
}

impl Instance {
    pub fn optimal_cost(&self) -> Option<i64> {
        self.optimal.as_ref().map(|s| s.cost)
    }
}
