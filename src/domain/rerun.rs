//! Rerun targets and the remote operations that act on them.

use std::num::NonZeroU64;

use crate::domain::{AppError, Repository};

pub const MISSING_ID_MESSAGE: &str = "run or job ID required when not running interactively";

/// What a rerun invocation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerunTarget {
    Run(u64),
    Job(u64),
    /// No identifier given; pick a recent failed run interactively.
    Interactive,
}

/// Result of resolving command-line identifiers into a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetResolution {
    pub target: RerunTarget,
    /// A positional run ID was dropped because a job ID was also given.
    pub ignored_run_id: bool,
}

/// Resolve the positional run ID and `--job` flag into a single target.
///
/// A job ID always wins over a run ID. Empty values count as absent.
pub fn resolve_target(
    run_id: Option<&str>,
    job_id: Option<&str>,
    can_prompt: bool,
) -> Result<TargetResolution, AppError> {
    let run_id = run_id.filter(|value| !value.is_empty());
    let job_id = job_id.filter(|value| !value.is_empty());

    match (run_id, job_id) {
        (None, None) if can_prompt => {
            Ok(TargetResolution { target: RerunTarget::Interactive, ignored_run_id: false })
        }
        (None, None) => Err(AppError::usage(MISSING_ID_MESSAGE)),
        (run_id, Some(job_id)) => Ok(TargetResolution {
            target: RerunTarget::Job(parse_id("job", job_id)?),
            ignored_run_id: run_id.is_some(),
        }),
        (Some(run_id), None) => Ok(TargetResolution {
            target: RerunTarget::Run(parse_id("run", run_id)?),
            ignored_run_id: false,
        }),
    }
}

/// IDs are positive decimal integers; signs, whitespace and zero are rejected.
fn parse_id(kind: &str, value: &str) -> Result<u64, AppError> {
    let invalid = || AppError::usage(format!("invalid {} ID: {:?}", kind, value));
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<NonZeroU64>().map(NonZeroU64::get).map_err(|_| invalid())
}

/// A rerun request against the Actions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerunOperation {
    Run { run_id: u64, only_failed: bool },
    Job { job_id: u64 },
}

impl RerunOperation {
    /// Last path segment selecting the remote variant.
    pub fn verb(&self) -> &'static str {
        match self {
            RerunOperation::Run { only_failed: true, .. } => "rerun-failed-jobs",
            RerunOperation::Run { only_failed: false, .. } | RerunOperation::Job { .. } => "rerun",
        }
    }

    /// API path relative to the API root, without a leading slash.
    pub fn api_path(&self, repo: &Repository) -> String {
        match self {
            RerunOperation::Run { run_id, .. } => {
                format!("repos/{}/actions/runs/{}/{}", repo.full_name(), run_id, self.verb())
            }
            RerunOperation::Job { job_id } => {
                format!("repos/{}/actions/jobs/{}/{}", repo.full_name(), job_id, self.verb())
            }
        }
    }

    /// Translate a failed rerun call into the error reported to the user.
    ///
    /// A 403 means the provider refuses to rerun the entity at all.
    pub fn rejection(&self, err: AppError) -> AppError {
        match (err.status(), self) {
            (Some(403), RerunOperation::Run { run_id, .. }) => {
                AppError::RunNotRerunnable { run_id: *run_id }
            }
            (Some(403), RerunOperation::Job { job_id }) => {
                AppError::JobNotRerunnable { job_id: *job_id }
            }
            _ => AppError::RerunFailed { source: Box::new(err) },
        }
    }
}
