//! Optional TOML configuration for the help registry
//!
//! ```toml
//! [render]
//! suggestions = true
//!
//! [[utility]]
//! name = "shout"
//! kind = "function"
//! summary = "Uppercase text"
//! signature = "shout(text: &str) -> String"
//! examples = ["shout(\"hi\") == \"HI\""]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, UtilityDescriptor};

/// Environment variable naming the config file when no path is given.
pub const CONFIG_ENV: &str = "TOOLBELT_HELP_CONFIG";

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Append a "did you mean" hint to not-found messages
    #[serde(default = "default_suggestions")]
    pub suggestions: bool,
}

fn default_suggestions() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpConfig {
    #[serde(default)]
    pub render: RenderConfig,
    /// Extra utilities documented alongside the built-ins
    #[serde(default, rename = "utility")]
    pub utilities: Vec<UtilityDescriptor>,
}

impl HelpConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: HelpConfig = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            utilities = config.utilities.len(),
            "Loaded help config"
        );
        Ok(config)
    }

    /// Load from `path` if given, else from [`CONFIG_ENV`] if set, else
    /// the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
