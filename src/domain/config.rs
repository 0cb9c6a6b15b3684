//! User configuration (`config.toml`).

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Repository};

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Actions API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API root. Derived from the repository host when unset.
    #[serde(default)]
    pub url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: None, timeout_secs: default_timeout() }
    }
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if let Some(url) = &self.url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::config_error(format!(
                    "api.url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }

    /// API root for `repo`, always ending in `/` so relative paths join under it.
    pub fn base_url_for(&self, repo: &Repository) -> Result<Url, AppError> {
        let mut url = match &self.url {
            Some(url) => url.clone(),
            None if repo.is_default_host() => Url::parse("https://api.github.com/")
                .map_err(|e| AppError::config_error(e.to_string()))?,
            None => Url::parse(&format!("https://{}/api/v3/", repo.host()))
                .map_err(|e| {
                    AppError::config_error(format!("Invalid host '{}': {}", repo.host(), e))
                })?,
        };

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
