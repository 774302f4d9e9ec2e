//! Engine configuration for algotrace
//!
//! Looked up in order: an explicit `--config` path, `./algotrace.toml`, then
//! the global `config.toml` (`$ALGOTRACE_CONFIG_DIR` or the platform config
//! directory). A missing file is not an error; every key has a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlgoError, Result};
use crate::format::OutputFormat;
use crate::graph::{MstAlgorithm, ShortestPathOptions};
use crate::sort::SortAlgorithm;

const CONFIG_DIR: &str = "algotrace";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "algotrace.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "ALGOTRACE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub output: OutputConfig,
    pub mst: MstConfig,
    pub sort: SortConfig,
    pub shortest_path: ShortestPathConfig,
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Human output prints the array, tree, or distance state under each step
    pub show_snapshots: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            show_snapshots: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MstConfig {
    pub algorithm: MstAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub algorithm: SortAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortestPathConfig {
    pub reject_negative_weights: bool,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            reject_negative_weights: true,
        }
    }
}

impl From<&ShortestPathConfig> for ShortestPathOptions {
    fn from(config: &ShortestPathConfig) -> Self {
        ShortestPathOptions {
            reject_negative_weights: config.reject_negative_weights,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause between steps in human output, in milliseconds
    pub delay_ms: u64,
}

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Path of the global config file, honoring `ALGOTRACE_CONFIG_DIR`
    pub fn global_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    AlgoError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Resolve and load the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the first existing candidate
    /// wins and defaults apply when there is none. Returns the file used.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, Some(local)));
        }

        // no resolvable global location just means no global config
        if let Ok(global) = Self::global_path() {
            if global.is_file() {
                return Ok((Self::load(&global)?, Some(global)));
            }
        }

        debug!("config_defaults");
        Ok((Self::default(), None))
    }

    pub fn shortest_path_options(&self) -> ShortestPathOptions {
        ShortestPathOptions::from(&self.shortest_path)
    }
}
