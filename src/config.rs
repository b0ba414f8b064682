//! Configuration management
//!
//! Settings are read from a TOML file. The file is located, in order, from
//! an explicit path, the `LIBCAT_CONFIG` environment variable, or
//! `~/.config/libcat/config.toml`. A missing file yields defaults; a file that
//! exists but cannot be parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LIBCAT_CONFIG";

const CONFIG_DIR: &str = "libcat";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Interactive menu settings
    #[serde(default)]
    pub menu: MenuConfig,
    /// Fee display settings
    #[serde(default)]
    pub fees: FeeConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Interactive menu settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuConfig {
    /// Start with the sample books and patrons loaded
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
    /// Prompt printed before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Fee display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeeConfig {
    /// Currency symbol printed before balances
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Output settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

const fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_true(),
            prompt: default_prompt(),
        }
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Default config file path (`~/.config/libcat/config.toml`)
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Resolve which config file to read
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::default_path(),
        }
    }

    /// Load config, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(explicit);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
