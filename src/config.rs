use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/server.json";
pub const DEFAULT_DATABASE_URL: &str = "data/feedback.db";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Plain path, `sqlite://path`, or `:memory:`
    pub database_url: String,
    pub port: u16,
    /// Empty means any origin may call the API.
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
        }
    }
}

/// Where the feedback store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    Memory,
    File(PathBuf),
}

impl StorageTarget {
    pub fn parse(url: &str) -> Self {
        let trimmed = url.trim();
        let path = trimmed.strip_prefix("sqlite://").unwrap_or(trimmed);
        match path {
            ":memory:" => StorageTarget::Memory,
            "" => StorageTarget::File(PathBuf::from(DEFAULT_DATABASE_URL)),
            path => StorageTarget::File(PathBuf::from(path)),
        }
    }
}

impl AppConfig {
    pub fn storage_target(&self) -> StorageTarget {
        StorageTarget::parse(&self.database_url)
    }

    pub fn listen_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Apply `DATABASE_URL` / `PORT` on top of the file config.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(env::var("DATABASE_URL").ok(), env::var("PORT").ok())
    }

    fn apply_overrides(mut self, database_url: Option<String>, port: Option<String>) -> Self {
        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            log::info!("DATABASE_URL set, using {url}");
            self.database_url = url;
        }

        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => log::warn!("Invalid PORT value `{raw}` ({err}); keeping {}", self.port),
            }
        }

        self
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
