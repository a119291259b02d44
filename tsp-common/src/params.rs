//! Per-algorithm parameter structs, matching the INI sections of §6.

use serde::{Deserialize, Serialize};

use crate::error::AlgorithmError;

/// `[random]` section: wall-clock time budget for the randomized sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRandom {
    pub millis: u64,
}

impl ParamRandom {
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.millis < 1 {
            return Err(AlgorithmError::InvalidParam(
                "random.millis must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// `[tabu_search]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamTabuSearch {
    pub itr: u32,
    pub max_itr_no_improve: u32,
    pub tabu_itr: u32,
}

impl ParamTabuSearch {
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.itr < 1 || self.max_itr_no_improve < 1 || self.tabu_itr < 1 {
            return Err(AlgorithmError::InvalidParam(
                "tabu_search.{itr,max_itr_no_improve,tabu_itr} must all be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// `[genetic]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamGenetic {
    pub itr: u32,
    pub population_size: u32,
    pub children_per_itr: u32,
    pub max_children_per_pair: u32,
    pub max_v_count_crossover: u32,
    pub mutations_per_1000: u32,
}

impl ParamGenetic {
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.itr < 1
            || self.population_size < 1
            || self.children_per_itr < 1
            || self.max_children_per_pair < 1
            || self.max_v_count_crossover < 1
        {
            return Err(AlgorithmError::InvalidParam(
                "genetic.{itr,population_size,children_per_itr,max_children_per_pair,\
                 max_v_count_crossover} must all be >= 1"
                    .into(),
            ));
        }
        if self.mutations_per_1000 > 1000 {
            return Err(AlgorithmError::InvalidParam(
                "genetic.mutations_per_1000 must be in 0..=1000".into(),
            ));
        }
        Ok(())
    }
}

/// All per-algorithm parameters, as loaded from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Params {
    pub random: Option<ParamRandom>,
    pub tabu_search: Option<ParamTabuSearch>,
    pub genetic: Option<ParamGenetic>,
}
