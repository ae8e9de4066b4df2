use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Affiliate ID used when no configuration file exists. The Tiempo HTTP
/// API requires one for accounting and throttling; a real deployment
/// should configure its own via `tiempo configure`.
pub const DEFAULT_AFFILIATE_ID: &str = "0123456789abcd";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// affiliate_id = "0123456789abcd"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tiempo API affiliate ID, embedded in every request URL.
    pub affiliate_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { affiliate_id: DEFAULT_AFFILIATE_ID.to_string() }
    }
}

impl Config {
    /// Load config from disk, or return the default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use the built-in affiliate ID.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tiempo", "tiempo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_builtin_affiliate_id() {
        let cfg = Config::default();
        assert_eq!(cfg.affiliate_id, DEFAULT_AFFILIATE_ID);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = Config { affiliate_id: "feedc0ffee".to_string() };

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.affiliate_id, "feedc0ffee");
    }

    #[test]
    fn config_rejects_malformed_toml() {
        let err = toml::from_str::<Config>("affiliate_id = ").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
