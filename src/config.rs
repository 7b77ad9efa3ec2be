//! TOML configuration for the calbucket CLI

use crate::calendar::FAKE_REFERENCE_YEAR;
use crate::types::OutputFormat;
use crate::zone::TimeZoneId;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration. Every field is optional; CLI flags win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Zone wall-clock fields are read and written in
    #[serde(default)]
    pub zone: Option<TimeZoneId>,

    /// Output format
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Bucket sequence settings
    #[serde(default)]
    pub buckets: BucketsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketsConfig {
    /// Kept as text so an unknown scale surfaces as `InvalidScale` at use
    #[serde(default = "default_scale")]
    pub scale: String,
    #[serde(default = "default_fake_year")]
    pub fake_year: i32,
}

impl Default for BucketsConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            fake_year: default_fake_year(),
        }
    }
}

fn default_scale() -> String {
    "day".to_string()
}
fn default_fake_year() -> i32 {
    FAKE_REFERENCE_YEAR
}

/// `<config dir>/calbucket/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calbucket").join("config.toml"))
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid calbucket configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `explicit` if given (it must exist), else the default path if it
    /// exists, else built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load(&path)
            }
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
