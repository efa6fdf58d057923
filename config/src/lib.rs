//! Configuration loading for Keel.
//!
//! Reads `~/.keel/config.toml` and resolves it into the validated settings
//! types from `keel-types`. Invalid values are rejected at the parse boundary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use keel_types::PinPolicy;

#[derive(Debug, Default, Deserialize)]
pub struct KeelConfig {
    pub pin: Option<PinPolicy>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl KeelConfig {
    /// Load the user config, if present.
    ///
    /// A missing file yields `None`. Unreadable or invalid files are logged and
    /// also yield `None`, so callers fall back to defaults.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Pin policy from `[pin]`, or the 3..=15 default.
    #[must_use]
    pub fn pin_policy(&self) -> PinPolicy {
        self.pin.unwrap_or_default()
    }
}

/// Location of the user config file: `~/.keel/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".keel").join("config.toml"))
}
