// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub programs: ProgramsConfig,

    #[serde(default)]
    pub live: LiveConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramsConfig {
    /// Scan tool invoked for host discovery
    #[serde(default = "default_nmap")]
    pub nmap: String,

    /// Diff tool invoked to compare consecutive scan files
    #[serde(default = "default_diff")]
    pub diff: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Seconds between live-monitor cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory holding `scan_<N>.txt` files (defaults to the working directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_nmap() -> String {
    "nmap".to_string()
}

fn default_diff() -> String {
    "diff".to_string()
}

fn default_interval_secs() -> u64 {
    1
}

impl Default for ProgramsConfig {
    fn default() -> Self {
        Self {
            nmap: default_nmap(),
            diff: default_diff(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("scanwatch");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or fall back to built-in defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Scan directory to use, falling back to the working directory
    pub fn scan_dir(&self) -> PathBuf {
        self.scan
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.programs.nmap, "nmap");
        assert_eq!(config.programs.diff, "diff");
        assert_eq!(config.live.interval_secs, 1);
        assert_eq!(config.scan.directory, None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.programs.nmap, config.programs.nmap);
        assert_eq!(deserialized.live.interval_secs, config.live.interval_secs);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[live]\ninterval_secs = 5\n").unwrap();
        assert_eq!(config.live.interval_secs, 5);
        assert_eq!(config.programs.nmap, "nmap");
    }
}
