//! Configuration loading: config file, environment overrides and credentials.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppConfig, AppError};

pub const CONFIG_ENV: &str = "RUNCTL_CONFIG";
pub const API_URL_ENV: &str = "RUNCTL_API_URL";
pub const TOKEN_ENVS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Load configuration from the default location with environment overrides applied.
pub fn load_config() -> Result<AppConfig, AppError> {
    let path = config_path(std::env::var_os(CONFIG_ENV), std::env::var_os("HOME"));
    let api_url = std::env::var(API_URL_ENV).ok().filter(|value| !value.trim().is_empty());
    load_config_from(path.as_deref(), api_url.as_deref())
}

/// Load configuration from `path`; a missing file or no path at all yields defaults.
pub fn load_config_from(
    path: Option<&Path>,
    api_url_override: Option<&str>,
) -> Result<AppConfig, AppError> {
    let mut config = match path {
        Some(path) if path.exists() => {
            log::debug!("loading config from {}", path.display());
            parse_config_content(&fs::read_to_string(path)?)?
        }
        Some(path) => {
            log::debug!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        None => {
            log::debug!("{} and HOME unset, using default config", CONFIG_ENV);
            AppConfig::default()
        }
    };

    if let Some(raw) = api_url_override {
        let url = Url::parse(raw).map_err(|e| {
            AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
        })?;
        config.api.url = Some(url);
    }

    config.validate()?;
    Ok(config)
}

pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}

fn config_path(explicit: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    home.filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("runctl").join("config.toml"))
}

/// Read the API token from `GH_TOKEN`, falling back to `GITHUB_TOKEN`.
pub fn load_token() -> Result<String, AppError> {
    token_from(|name| std::env::var(name).ok())
}

fn token_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, AppError> {
    TOKEN_ENVS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()))
        .ok_or_else(|| AppError::EnvironmentVariableMissing(TOKEN_ENVS.join(" or ")))
}
