//! Dashboard configuration.
//!
//! Resolution order, later wins: built-in defaults, YAML file, environment.
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use barn_core::QuantityUnit;
use barn_locale::Language;
use barn_tracker::CatalogPreset;

use crate::error::DashboardError;

/// Default delay before the "updated" acknowledgment clears.
pub const DEFAULT_ACK_DELAY_MS: u64 = 2000;

/// Settings for one dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Display language.
    pub language: Language,
    /// Unit the tracker counts in.
    pub unit: QuantityUnit,
    /// Which item catalog to track.
    pub catalog: CatalogPreset,
    /// Milliseconds the acknowledgment stays visible after a commit.
    pub ack_delay_ms: u64,
    /// Directory of `{code}.yaml` string tables overriding the embedded ones.
    pub locale_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            unit: QuantityUnit::Tons,
            catalog: CatalogPreset::Seasonal,
            ack_delay_ms: DEFAULT_ACK_DELAY_MS,
            locale_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults, overlaid with `path` if given, overlaid with the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, DashboardError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Read a YAML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DashboardError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DashboardError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        serde_yaml::from_str(&content).map_err(|e| DashboardError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply overrides from `BARN_LANG`, `BARN_UNIT`, `BARN_CATALOG`,
    /// `BARN_ACK_DELAY_MS` and `BARN_LOCALE_DIR`, read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BARN_LANG") {
            self.language = parse_env("BARN_LANG", &v)?;
        }
        if let Some(v) = lookup("BARN_UNIT") {
            self.unit = parse_env("BARN_UNIT", &v)?;
        }
        if let Some(v) = lookup("BARN_CATALOG") {
            self.catalog = parse_env("BARN_CATALOG", &v)?;
        }
        if let Some(v) = lookup("BARN_ACK_DELAY_MS") {
            self.ack_delay_ms = parse_env("BARN_ACK_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("BARN_LOCALE_DIR") {
            if !v.trim().is_empty() {
                self.locale_dir = Some(PathBuf::from(v));
            }
        }
        Ok(())
    }

    /// Acknowledgment delay as a [`Duration`].
    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.ack_delay_ms)
    }
}

fn parse_env<T>(var: &'static str, value: &str) -> Result<T, DashboardError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| DashboardError::InvalidEnv {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
