//! Layered configuration for graph construction, census runs and logging.
//!
//! Sources are merged in order: built-in defaults, an optional TOML file,
//! then `GRAPHADT_`-prefixed environment variables (nested keys use `__`,
//! e.g. `GRAPHADT_CENSUS__SEED=42`).
//!
//! ```rust
//! use graphadt_core::config::{AdjacencyCheck, GraphConfig};
//!
//! let config = GraphConfig::from_toml_str("[census]\nseed = 7\n").unwrap();
//! assert_eq!(config.census.seed, Some(7));
//! assert_eq!(config.adjacency, AdjacencyCheck::NodesExist);
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHADT_";

/// How `is_adj` decides whether two nodes are adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyCheck {
    /// Both node IDs exist; no edge lookup is performed.
    #[default]
    NodesExist,
    /// An edge `tail -> head` exists.
    EdgeExists,
}

/// Concrete edge storage selected by graph factories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBacking {
    /// Ordered successor lists per node.
    #[default]
    List,
    /// Square matrix of optional edge cells.
    Matrix,
}

/// Median census settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// Seed for the candidate picker. `None` draws from entropy.
    pub seed: Option<u64>,
}

/// Logging settings consumed by binaries installing a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// `is_adj` behaviour.
    pub adjacency: AdjacencyCheck,
    /// Edge storage backing.
    pub storage: StorageBacking,
    /// Census settings.
    pub census: CensusConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl GraphConfig {
    /// Loads defaults, then `path` (if any), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(GraphConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: GraphConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: GraphConfig = Figment::from(Serialized::defaults(GraphConfig::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level cannot be empty".to_string()));
        }
        Ok(())
    }
}
