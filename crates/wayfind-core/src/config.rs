//! Search configuration for wayfind
//!
//! Configuration is read from a TOML file, `wayfind.toml` by convention:
//!
//! ```toml
//! frontier = "heap"
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};
use crate::graph::{FrontierKind, SearchOptions};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wayfind.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Frontier strategy used by the search
    #[serde(default)]
    pub frontier: FrontierKind,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging defaults, used when no CLI flag is given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level or full filter directive (e.g. "debug", "wayfind_core=trace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl SearchConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WayfindError::invalid_config(path, e))
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WayfindError::invalid_config(path, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Options for a search run under this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            frontier: self.frontier,
        }
    }
}
