//! Run configuration.
//!
//! Defaults target the production CRM workspace. An optional config file at
//! `~/.config/plantmap/config.json` overrides any subset of fields, and
//! `PLANTMAP_API_URL` / `PLANTMAP_OUTPUT` override the endpoint and output
//! file for a single run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "plantmap";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const DEFAULT_API_BASE_URL: &str = "https://api.attio.com/v2";

/// The Alabama pipeline list.
const DEFAULT_PIPELINE_LIST_ID: &str = "fc93ded9-7b9e-4e48-99d5-583cf8dd85d6";

/// Records requested per query. Only the first page is ever fetched.
const DEFAULT_PAGE_LIMIT: u32 = 500;

/// Most contacts fetched in one run. Ids past the cap stay unenriched;
/// this bounds request volume and is not a paging mechanism.
pub const PERSON_FETCH_LIMIT: usize = 20;

const BULK_TIMEOUT_SECS: u64 = 30;
const PERSON_TIMEOUT_SECS: u64 = 5;

const DEFAULT_OUTPUT_FILE: &str = "plants.json";

const ENV_API_URL: &str = "PLANTMAP_API_URL";
const ENV_OUTPUT: &str = "PLANTMAP_OUTPUT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub plants_object: String,
    pub pipeline_list_id: String,
    pub page_limit: u32,
    pub person_fetch_limit: usize,
    pub bulk_timeout_secs: u64,
    pub person_timeout_secs: u64,
    pub output_path: PathBuf,
    /// Overrides the default `~/.config/attio/api_key`.
    pub api_key_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            plants_object: "plants".to_string(),
            pipeline_list_id: DEFAULT_PIPELINE_LIST_ID.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            person_fetch_limit: PERSON_FETCH_LIMIT,
            bulk_timeout_secs: BULK_TIMEOUT_SECS,
            person_timeout_secs: PERSON_TIMEOUT_SECS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            api_key_path: None,
        }
    }
}

impl Config {
    /// Load from the user config file (if any), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(output) = var(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output_path = PathBuf::from(output);
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn bulk_timeout(&self) -> Duration {
        Duration::from_secs(self.bulk_timeout_secs)
    }

    pub fn person_timeout(&self) -> Duration {
        Duration::from_secs(self.person_timeout_secs)
    }
}
