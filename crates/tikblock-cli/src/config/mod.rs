//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration. The password is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// RouterOS device address.
    pub device: Option<String>,

    /// RouterOS username.
    pub username: Option<String>,

    /// Feed URL (defaults to the Talos IP blacklist).
    pub feed_url: Option<String>,

    /// Address-list name.
    pub list: Option<String>,

    /// Per-request timeout in seconds, 0 for none.
    pub timeout_secs: Option<u64>,

    /// Uploads in flight at once.
    pub concurrency: Option<usize>,

    /// Accept self-signed or otherwise invalid device certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "tikblock", "tikblock")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Config file path, honoring an explicit override.
    pub fn path(custom: Option<&Path>) -> Result<PathBuf> {
        custom.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            device: Some("192.168.88.1".into()),
            username: Some("admin".into()),
            list: Some("BLOCKED".into()),
            timeout_secs: Some(10),
            accept_invalid_certs: true,
            output_format: Some(OutputFormat::Json),
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "device = \"10.0.0.1\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.device.as_deref(), Some("10.0.0.1"));
        assert!(config.username.is_none());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_explicit_path_wins() {
        let custom = Path::new("/tmp/tikblock-test.toml");
        assert_eq!(Config::path(Some(custom)).unwrap(), custom);
    }
}
