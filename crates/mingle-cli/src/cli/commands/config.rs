//! Config command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use mingle_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    init_at(&config::paths::config_path())
}

fn init_at(config_path: &Path) -> Result<()> {
    config::Config::init(config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Config init: writes the template, refuses a second run.
    #[test]
    fn test_init_creates_config_once() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        init_at(&config_path).unwrap();
        assert!(config_path.exists());

        let err = init_at(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("already exists"));
    }

    /// The written file parses back into a valid Config.
    #[test]
    fn test_init_output_loads() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        init_at(&config_path).unwrap();

        let loaded = config::Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.auth_latency_ms, config::Config::DEFAULT_AUTH_LATENCY_MS);
    }
}
