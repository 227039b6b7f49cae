use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use scalescope_engine::FetchSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "scalescope.ron";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/fetch-startups/";

/// Settings read from `scalescope.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub export_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir: PathBuf::from("."),
            export_dir: PathBuf::from("."),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_body_bytes: fetch.max_bytes,
        }
    }
}

impl AppConfig {
    pub fn level_filter(&self) -> LevelFilter {
        scope_logging::level_from_name(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
            ..FetchSettings::default()
        }
    }
}

/// Reads the config file. A missing file yields the defaults.
pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
