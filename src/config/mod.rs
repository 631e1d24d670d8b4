use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::constants::{API_BASE_ENV, CONFIG_FILE, DEFAULT_API_BASE, TOKEN_ENV};
use crate::error::{IdeatexError, IdeatexResult};

/// Client-persisted session storage: bearer token plus team/user identifiers,
/// stored as plain strings with no schema versioning.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|mut path| {
            path.push(CONFIG_FILE);
            path
        })
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn load_config() -> Config {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &PathBuf) -> Config {
    if path.exists() {
        let content = fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> IdeatexResult<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &Config, path: &PathBuf) -> IdeatexResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Resolve the bearer token: environment variable first, then config file.
pub fn get_token() -> IdeatexResult<String> {
    if let Ok(token) = env::var(TOKEN_ENV) {
        return Ok(token);
    }

    let config = load_config();
    if let Some(token) = config.token {
        return Ok(token);
    }

    Err(IdeatexError::TokenNotFound)
}

/// Resolve the API base URL: environment variable, config file, then default.
pub fn get_api_base() -> String {
    if let Ok(base) = env::var(API_BASE_ENV) {
        return base;
    }

    load_config()
        .api_base
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}
