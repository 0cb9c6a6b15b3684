//! GitHub Actions API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiConfig, AppError, Job, RerunOperation, Repository, Run};
use crate::ports::ActionsApi;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the Actions API.
///
/// One request per call; failures are surfaced immediately.
#[derive(Clone)]
pub struct HttpActionsClient {
    token: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpActionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpActionsClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpActionsClient {
    /// Create a client rooted at `base_url`, which must end in `/`.
    pub fn new(token: String, base_url: Url, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(path).map_err(|e| AppError::ParseError {
            what: "API URL".into(),
            details: format!("{}{}: {}", self.base_url, path, e),
        })
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, concat!("runctl/", env!("CARGO_PKG_VERSION")))
            .header(X_GITHUB_API_VERSION, API_VERSION)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().unwrap_or_default();
        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            status.canonical_reason().unwrap_or(DEFAULT_STATUS_MESSAGE).to_string()
        });
        log::debug!("API responded {} ({})", status.as_u16(), message);

        Err(AppError::ApiStatus { status: status.as_u16(), message })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);

        let response = self.send(self.client.get(url).query(query))?;
        response.json::<T>().map_err(|e| AppError::ParseError {
            what: format!("response from {}", path),
            details: e.to_string(),
        })
    }

    fn post_empty(&self, path: &str) -> Result<(), AppError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);

        self.send(self.client.post(url).body(Vec::new()))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RunsPage {
    #[serde(default)]
    workflow_runs: Vec<Run>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ActionsApi for HttpActionsClient {
    fn get_run(&self, repo: &Repository, run_id: u64) -> Result<Run, AppError> {
        let path = format!("repos/{}/actions/runs/{}", repo.full_name(), run_id);
        self.get_json(&path, &[])
    }

    fn get_job(&self, repo: &Repository, job_id: u64) -> Result<Job, AppError> {
        let path = format!("repos/{}/actions/jobs/{}", repo.full_name(), job_id);
        self.get_json(&path, &[])
    }

    fn list_runs(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Run>, AppError> {
        let path = format!("repos/{}/actions/runs", repo.full_name());
        let query = [("per_page", per_page.to_string()), ("page", page.to_string())];
        let runs: RunsPage = self.get_json(&path, &query)?;
        Ok(runs.workflow_runs)
    }

    fn rerun(&self, repo: &Repository, operation: &RerunOperation) -> Result<(), AppError> {
        self.post_empty(&operation.api_path(repo))
    }
}
