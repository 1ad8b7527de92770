//! Global agenda configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_DATA_FILE: &str = "~/agenda/agenda_events.json";

/// Environment variables `AGENDA_<KEY>` override config file keys.
const ENV_PREFIX: &str = "AGENDA";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

/// Configuration at ~/.config/agenda/config.toml
///
/// Every key can be overridden with an `AGENDA_`-prefixed environment
/// variable (`AGENDA_DATA_FILE`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AgendaConfig {
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_file: default_data_file(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from ~/.config/agenda/config.toml, creating a
    /// commented-out default file first if there is none.
    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config from a specific file (which may be missing), layered
    /// with the `AGENDA_*` environment variables.
    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// File first, then `env` on top of it.
    fn load_layered(path: &Path, env: Environment) -> AgendaResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))
    }

    /// The backing file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/agenda/config.toml
    pub fn save(&self) -> AgendaResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write this config to `path`. Keys left at their default are omitted.
    pub fn save_to(&self, path: &Path) -> AgendaResult<()> {
        let settings =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        write_config_file(path, &format!("{CONFIG_HEADER}\n{settings}"))
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "{CONFIG_HEADER}\n# Where your events are stored:\n# data_file = \"{DEFAULT_DATA_FILE}\"\n"
        );

        write_config_file(path, &contents)
    }
}

const CONFIG_HEADER: &str = "# agenda configuration\n";

/// Write a config file, creating ~/.config/agenda on first use.
fn write_config_file(path: &Path, contents: &str) -> AgendaResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AgendaError::Config(format!("Could not create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, contents).map_err(|e| {
        AgendaError::Config(format!("Could not write {}: {e}", path.display()))
    })
}
