//! Board configuration
//!
//! ```toml
//! [board]
//! sysfs_root = "/sys"
//! settle_delay_ms = 1000
//! analog_overlay = "BB-ADC"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

/// Default mount point of sysfs
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

/// Default wait after PWM export and analog enable, in ms
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Cape manager overlay that brings up the ADC
pub const DEFAULT_ANALOG_OVERLAY: &str = "BB-ADC";

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// TOML parsing failed
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Board-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Where sysfs is mounted; every resource path is resolved below it
    pub sysfs_root: PathBuf,
    /// Fixed wait after a configuration write before the resource is usable
    pub settle_delay_ms: u64,
    /// Overlay name written to the cape manager slots to enable the ADC
    pub analog_overlay: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            analog_overlay: DEFAULT_ANALOG_OVERLAY.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    board: BoardConfig,
}

impl BoardConfig {
    /// Parse a TOML document; a missing `[board]` table yields defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        Ok(file.board)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            sysfs_root = %config.sysfs_root.display(),
            settle_delay_ms = config.settle_delay_ms,
            "loaded board config"
        );
        Ok(config)
    }

    /// The settle delay as a [`Duration`]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.sysfs_root, Path::new("/sys"));
        assert_eq!(config.settle_delay(), Duration::from_secs(1));
        assert_eq!(config.analog_overlay, "BB-ADC");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(BoardConfig::from_toml_str("").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_toml_str(
            r#"
            [board]
            sysfs_root = "/tmp/fake-sys"
            settle_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.sysfs_root, Path::new("/tmp/fake-sys"));
        assert_eq!(config.settle_delay_ms, 0);
        assert_eq!(config.analog_overlay, DEFAULT_ANALOG_OVERLAY);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = BoardConfig::from_toml_str("[board]\nsettle = 5\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = BoardConfig::load("/nonexistent/bonepin.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
