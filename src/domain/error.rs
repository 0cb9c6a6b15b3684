use std::io;

use thiserror::Error;

/// Library-wide error type for runctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Command-line usage problem, detected before any network activity.
    #[error("{0}")]
    Usage(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is missing.
    #[error("Environment variable '{0}' not set")]
    EnvironmentVariableMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Repository reference could not be parsed.
    #[error("Invalid repository '{value}': {reason}")]
    InvalidRepository { value: String, reason: String },

    /// Repository to operate on could not be determined.
    #[error("failed to determine base repo: {source}")]
    BaseRepo {
        #[source]
        source: Box<AppError>,
    },

    /// Git inspection failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Interactive mode found nothing worth rerunning.
    #[error("no recent runs have failed; please specify a specific run ID")]
    NoFailedRuns,

    /// Interactive selection failed or was cancelled.
    #[error("{0}")]
    Prompt(String),

    #[error("run {run_id} cannot be rerun; its workflow file may be broken")]
    RunNotRerunnable { run_id: u64 },

    #[error("job {job_id} cannot be rerun")]
    JobNotRerunnable { job_id: u64 },

    /// The rerun request itself failed for a reason other than a 403.
    #[error("failed to rerun: {source}")]
    RerunFailed {
        #[source]
        source: Box<AppError>,
    },

    /// Fetching run, job or candidate metadata failed.
    #[error("failed to get {what}: {source}")]
    LookupFailed {
        what: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn lookup(what: &'static str, source: AppError) -> Self {
        AppError::LookupFailed { what, source: Box::new(source) }
    }

    /// HTTP status carried by an API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::ApiStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            _ => 1,
        }
    }
}
