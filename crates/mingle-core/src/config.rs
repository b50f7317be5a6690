//! Configuration management for Mingle.
//!
//! Loads configuration from ${MINGLE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for Mingle configuration and data directories.
    //!
    //! MINGLE_HOME resolution order:
    //! 1. MINGLE_HOME environment variable (if set)
    //! 2. ~/.config/mingle (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if resolvable.
    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(unix)]
        {
            std::env::var_os("HOME").map(PathBuf::from)
        }
        #[cfg(not(unix))]
        {
            std::env::var_os("USERPROFILE").map(PathBuf::from)
        }
    }

    /// Returns the Mingle home directory.
    ///
    /// Checks MINGLE_HOME env var first, falls back to ~/.config/mingle
    pub fn mingle_home() -> PathBuf {
        if let Ok(home) = std::env::var("MINGLE_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("mingle"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mingle_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        mingle_home().join("logs")
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency for login/register/connect calls, in milliseconds.
    pub auth_latency_ms: u64,
    /// Simulated latency for password-reset calls, in milliseconds.
    pub reset_latency_ms: u64,
    /// Email address pre-filled on the login screen.
    pub login_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_latency_ms: Self::DEFAULT_AUTH_LATENCY_MS,
            reset_latency_ms: Self::DEFAULT_RESET_LATENCY_MS,
            login_email: None,
        }
    }
}

impl Config {
    pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;
    pub const DEFAULT_RESET_LATENCY_MS: u64 = 1500;

    /// Loads configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.auth_latency_ms, 1000);
        assert_eq!(config.reset_latency_ms, 1500);
        assert_eq!(config.login_email, None);
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "auth_latency_ms = 50\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.auth_latency_ms, 50);
        assert_eq!(config.reset_latency_ms, 1500);
    }

    /// Config init: creates file with defaults, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.auth_latency_ms, Config::DEFAULT_AUTH_LATENCY_MS);
    }

    /// Config init: refuses to overwrite an existing file.
    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "# taken\n").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    /// The embedded template parses as a valid Config.
    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.auth_latency_ms, Config::DEFAULT_AUTH_LATENCY_MS);
    }
}
