//! Solver settings that can be loaded from a TOML file, for example
//!
//! ```toml
//! engine = "astar"
//! heuristic = "manhattan"
//! graph-search = true
//! time-limit = "30s"
//! expansion-limit = 1000000
//! ```

use crate::search::{
    heuristics::HeuristicName,
    problems::SlidingTiles,
    search_engines::{SearchEngine, SearchEngineName, SearchLimits},
    Verbosity,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    TimeLimit {
        value: String,
        source: humantime::DurationError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SolverConfig {
    pub engine: SearchEngineName,
    pub heuristic: HeuristicName,
    /// Skip states that were already expanded. Ignored by IDA*.
    pub graph_search: bool,
    /// A human readable duration such as `"1m 30s"`
    pub time_limit: Option<String>,
    pub expansion_limit: Option<usize>,
    pub memory_limit_mb: Option<usize>,
    pub verbosity: Verbosity,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::AStar,
            heuristic: HeuristicName::Manhattan,
            graph_search: true,
            time_limit: None,
            expansion_limit: None,
            memory_limit_mb: None,
            verbosity: Verbosity::Normal,
        }
    }
}

impl SolverConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        // fail on a malformed time limit here, not at search time
        config.limits()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn limits(&self) -> Result<SearchLimits, ConfigError> {
        let mut limits = SearchLimits::unlimited();
        if let Some(value) = &self.time_limit {
            let time_limit =
                humantime::parse_duration(value).map_err(|source| ConfigError::TimeLimit {
                    value: value.clone(),
                    source,
                })?;
            limits = limits.with_time_limit(time_limit);
        }
        if let Some(expansion_limit) = self.expansion_limit {
            limits = limits.with_expansion_limit(expansion_limit);
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            limits = limits.with_memory_limit_mb(memory_limit_mb);
        }
        Ok(limits)
    }

    pub fn create_engine(&self) -> Result<Box<dyn SearchEngine<SlidingTiles>>, ConfigError> {
        Ok(self
            .engine
            .create(self.heuristic.create(), self.graph_search, self.limits()?))
    }
}
