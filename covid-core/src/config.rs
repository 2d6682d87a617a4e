use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::endpoints::Endpoints;

/// Top-level configuration stored on disk. Every field is optional; unset
/// fields fall back to the public JHU CSSE repository.
///
/// Example TOML:
/// ```toml
/// daily_reports_base_url = "https://example.org/daily_reports/"
/// time_series_url = "https://example.org/time_series_confirmed.csv"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub daily_reports_base_url: Option<String>,
    pub time_series_url: Option<String>,
    /// `tracing` filter directive, e.g. `"info"` or `"covid_core=debug"`.
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "covid-report", "covid-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Upstream URLs with defaults filled in.
    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            daily_reports_base_url: self
                .daily_reports_base_url
                .clone()
                .unwrap_or(defaults.daily_reports_base_url),
            time_series_url: self.time_series_url.clone().unwrap_or(defaults.time_series_url),
        }
    }

    /// Blank strings clear a field back to its default.
    pub fn set_daily_reports_base_url(&mut self, url: &str) {
        self.daily_reports_base_url = non_blank(url);
    }

    pub fn set_time_series_url(&mut self, url: &str) {
        self.time_series_url = non_blank(url);
    }

    pub fn set_log_level(&mut self, level: &str) {
        self.log_level = non_blank(level);
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
