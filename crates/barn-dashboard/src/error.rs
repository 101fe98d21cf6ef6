//! Dashboard error types.

use std::path::PathBuf;

use thiserror::Error;

use barn_locale::LocaleError;
use barn_tracker::CatalogError;

/// Errors raised while configuring or entering the dashboard.
///
/// Failures of the session backend are not here: they degrade the
/// dashboard and surface as notifications.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Config file does not exist.
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`DashboardConfig`](crate::DashboardConfig).
    #[error("failed to parse config {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// An environment override holds an unrecognised value.
    #[error("invalid {var}={value:?}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
