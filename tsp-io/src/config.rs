//! The INI configuration format (§6.2): names an instance file plus the
//! per-algorithm parameter sections, loaded relative to the config file's
//! own directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::{Ini, Properties};
use tsp_common::{
    ConfigError, CostMatrix, GraphInfo, Instance, ParamGenetic, ParamRandom, ParamTabuSearch, Params, Solution,
};

use crate::instance_file;

/// Load a full [`Instance`] from an INI config file: the instance matrix
/// (via `[instance].input_path`, resolved relative to `config_path`'s
/// directory), the graph shape, the optional known optimum, and whichever
/// per-algorithm parameter sections are present.
pub fn load_instance(config_path: &Path) -> Result<Instance, ConfigError> {
    log::info!("loading instance config from {}", config_path.display());
    let contents = fs::read_to_string(config_path)?;
    let ini = Ini::load_from_str(&contents).map_err(|e| ConfigError::BadConfig(e.to_string()))?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let instance_section = ini
        .section(Some("instance"))
        .ok_or_else(|| ConfigError::BadConfig("missing [instance] section".into()))?;
    let input_path = instance_section
        .get("input_path")
        .ok_or_else(|| ConfigError::BadConfig("missing instance.input_path".into()))?;
    let symmetric = parse_bool(instance_section.get("symmetric"), false, "instance.symmetric")?;
    let full = parse_bool(instance_section.get("full"), false, "instance.full")?;

    let resolved_path = resolve_path(base_dir, input_path);
    let matrix = instance_file::read_matrix(&resolved_path).map_err(|e| ConfigError::CanNotProceed(Box::new(e)))?;

    let optimal = load_optimal(&ini)?;

    let params = Params {
        random: load_random(&ini)?,
        tabu_search: load_tabu_search(&ini)?,
        genetic: load_genetic(&ini)?,
    };

    Ok(Instance {
        matrix,
        graph_info: GraphInfo { symmetric, full },
        optimal,
        params,
    })
}

fn resolve_path(base_dir: &Path, raw: &str) -> PathBuf {
    let candidate = Path::new(raw);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    }
}

fn parse_bool(value: Option<&str>, default: bool, key: &str) -> Result<bool, ConfigError> {
    match value {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::BadConfig(format!("{key} is not a bool: {s:?}"))),
    }
}

fn parse_required<T: FromStr>(section: &Properties, key: &str, section_name: &str) -> Result<T, ConfigError> {
    let raw = section
        .get(key)
        .ok_or_else(|| ConfigError::BadConfig(format!("missing {section_name}.{key}")))?;
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::BadConfig(format!("{section_name}.{key} is not an integer: {raw:?}")))
}

fn load_optimal(ini: &Ini) -> Result<Option<Solution>, ConfigError> {
    let Some(section) = ini.section(Some("optimal")) else {
        return Ok(None);
    };

    match (section.get("path"), section.get("cost")) {
        (None, None) => Ok(None),
        (Some(path_str), Some(cost_str)) => {
            let path: Vec<usize> = path_str
                .split_whitespace()
                .map(|tok| {
                    tok.parse()
                        .map_err(|_| ConfigError::BadConfig(format!("optimal.path token is not a vertex index: {tok:?}")))
                })
                .collect::<Result<_, _>>()?;
            let cost: i64 = cost_str
                .trim()
                .parse()
                .map_err(|_| ConfigError::BadConfig(format!("optimal.cost is not an integer: {cost_str:?}")))?;
            Ok(Some(Solution::new(path, cost)))
        }
        _ => Err(ConfigError::BadConfig(
            "[optimal] requires both path and cost, or neither".into(),
        )),
    }
}

fn load_random(ini: &Ini) -> Result<Option<ParamRandom>, ConfigError> {
    let Some(section) = ini.section(Some("random")) else {
        return Ok(None);
    };
    Ok(Some(ParamRandom {
        millis: parse_required(section, "millis", "random")?,
    }))
}

fn load_tabu_search(ini: &Ini) -> Result<Option<ParamTabuSearch>, ConfigError> {
    let Some(section) = ini.section(Some("tabu_search")) else {
        return Ok(None);
    };
    Ok(Some(ParamTabuSearch {
        itr: parse_required(section, "itr", "tabu_search")?,
        max_itr_no_improve: parse_required(section, "max_itr_no_improve", "tabu_search")?,
        tabu_itr: parse_required(section, "tabu_itr", "tabu_search")?,
    }))
}

fn load_genetic(ini: &Ini) -> Result<Option<ParamGenetic>, ConfigError> {
    let Some(section) = ini.section(Some("genetic")) else {
        return Ok(None);
    };
    Ok(Some(ParamGenetic {
        itr: parse_required(section, "itr", "genetic")?,
        population_size: parse_required(section, "population_size", "genetic")?,
        children_per_itr: parse_required(section, "children_per_itr", "genetic")?,
        max_children_per_pair: parse_required(section, "max_children_per_pair", "genetic")?,
        max_v_count_crossover: parse_required(section, "max_v_count_crossover", "genetic")?,
        mutations_per_1000: parse_required(section, "mutations_per_1000", "genetic")?,
    }))
}
