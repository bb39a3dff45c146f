//! Timetable source configuration.
//!
//! The only setting is the base address of the external timetable site. Its
//! absence is not an error here: the pipeline raises a configuration error
//! lazily, on the first load attempt, so a process that never loads never
//! fails on a missing address.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the timetable site address.
pub const TIMETABLE_WEBSITE_VAR: &str = "TIMETABLE_WEBSITE";

/// Configuration errors raised by file-based loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
    #[error("no timetable.toml found in standard locations")]
    NotFound,
}

/// Timetable source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceConfig {
    base_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ConfigFile {
    source: SourceSection,
}

#[derive(Debug, Deserialize, Serialize)]
struct SourceSection {
    base_url: String,
}

impl SourceConfig {
    /// Configuration with a known source address.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Configuration without a source address. Loading through it fails with
    /// a configuration error.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Read the source address from `TIMETABLE_WEBSITE`.
    ///
    /// An unset or empty variable yields an unconfigured instance rather
    /// than an error.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(TIMETABLE_WEBSITE_VAR)
                .ok()
                .filter(|value| !value.is_empty()),
        }
    }

    /// Load configuration from a TOML file:
    ///
    /// ```toml
    /// [source]
    /// base_url = "https://school.example.com/timetable"
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::new(file.source.base_url))
    }

    /// Load `timetable.toml` from the current or parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// The configured source address, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}
