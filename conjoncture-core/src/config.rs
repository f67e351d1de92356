//! Dashboard configuration (TOML).
//!
//! Every field is optional. A missing file yields [`DashboardConfig::default`];
//! a malformed one is an error. Tab ids are resolved leniently: an unknown id
//! is logged and replaced by the default tab.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DashboardError;
use crate::navigation::{NavigationState, PrimaryTab, SecondaryTab};

pub const MIN_TICK_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    InvalidSelection(#[from] DashboardError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file for the terminal UI. `None` means the default state-dir file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub initial_tab: Option<String>,
    pub initial_sub_tab: Option<String>,
    pub show_help_on_start: bool,
    /// Event poll interval of the terminal UI.
    pub tick_ms: u64,
    pub log: LogConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_tab: None,
            initial_sub_tab: None,
            show_help_on_start: false,
            tick_ms: 250,
            log: LogConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// `$XDG_CONFIG_HOME/conjoncture/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("conjoncture").join("config.toml"))
    }

    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: source_name.to_string(),
            source: e,
        })
    }

    /// Read `path`; a file that does not exist gives the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load the explicit path if given, else the default location.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS)
    }

    /// Initial navigation state. Unknown ids keep the default and are
    /// returned so the caller can report them.
    pub fn initial_navigation(&self) -> (NavigationState, Vec<DashboardError>) {
        let mut nav = NavigationState::default();
        let mut rejected = Vec::new();
        if let Some(tab) = &self.initial_tab {
            if let Err(err) = nav.select_primary(tab) {
                tracing::warn!(%err, "ignoring configured initial_tab");
                rejected.push(err);
            }
        }
        if let Some(sub) = &self.initial_sub_tab {
            if let Err(err) = nav.select_secondary(sub) {
                tracing::warn!(%err, "ignoring configured initial_sub_tab");
                rejected.push(err);
            }
        }
        (nav, rejected)
    }

    /// Like [`initial_navigation`](Self::initial_navigation) but rejecting unknown ids.
    pub fn strict_navigation(&self) -> Result<NavigationState, ConfigError> {
        let primary = match &self.initial_tab {
            Some(tab) => tab.parse::<PrimaryTab>()?,
            None => PrimaryTab::default(),
        };
        let secondary = match &self.initial_sub_tab {
            Some(sub) => sub.parse::<SecondaryTab>()?,
            None => SecondaryTab::default(),
        };
        Ok(NavigationState::new(primary, secondary))
    }
}
