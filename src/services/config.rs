use crate::domain::constants::{
    DEFAULT_BASE_URL, DEFAULT_RESOURCE_ID, DEFAULT_TIMEOUT_SECS, PUBLIC_SAMPLE_API_KEY,
};
use crate::domain::models::{ConfigFile, Settings};
use std::path::PathBuf;

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub resource_id: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/mandi-probe/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = match config_path() {
        Some(p) if p.exists() => p,
        _ => return Ok(ConfigFile::default()),
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
    let parsed: ConfigFile = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(parsed)
}

pub fn resolve_settings(file: ConfigFile, overrides: Overrides) -> Settings {
    Settings {
        base_url: overrides
            .base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        resource_id: overrides
            .resource_id
            .or(file.resource_id)
            .unwrap_or_else(|| DEFAULT_RESOURCE_ID.to_string()),
        api_key: overrides
            .api_key
            .or(file.api_key)
            .unwrap_or_else(|| PUBLIC_SAMPLE_API_KEY.to_string()),
        timeout_secs: overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    }
}
