use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::dashboard::Breakpoints;
use crate::error::{IronError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "IRONCTL_CONFIG";

/// Configuration for the ironctl binaries
///
/// Every section is optional in the file; missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IronConfig {
    pub server: ServerSection,
    /// Terminal grid breakpoints, in character cells
    pub layout: Breakpoints,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3040)),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}

impl IronConfig {
    /// Load config from `$IRONCTL_CONFIG` or ~/.ironctl/config.toml
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| IronError::toml(path, e))?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ironctl/config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.tui.tick_ms == 0 {
            return Err(IronError::config("tui.tick_ms must be greater than zero"));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| IronError::config(format!("failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = IronConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, IronConfig::default());
        assert_eq!(config.server.bind.port(), 3040);
        assert_eq!(config.layout, Breakpoints::TERMINAL);
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nwide = 150\n\n[server]\nbind = \"0.0.0.0:8080\"").unwrap();

        let config = IronConfig::load_from(file.path()).unwrap();
        assert_eq!(config.layout, Breakpoints::new(80, 150).unwrap());
        assert_eq!(config.server.bind.port(), 8080);
        assert!(!config.server.cors_permissive);
        assert_eq!(config.tui.tick_ms, 250);
    }

    #[test]
    fn invalid_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout\nmedium = ").unwrap();

        let err = IronConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, IronError::Toml { .. }));
    }

    #[test]
    fn inverted_breakpoints_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nmedium = 130\nwide = 100").unwrap();

        let err = IronConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, IronError::Config { .. }));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = IronConfig::default().to_toml().unwrap();
        let parsed: IronConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, IronConfig::default());
    }
}
