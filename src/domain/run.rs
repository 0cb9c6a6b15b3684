//! Workflow run and job metadata as returned by the Actions API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Lifecycle state of a workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Requested,
    Queued,
    Pending,
    Waiting,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Outcome of a completed workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunConclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimedOut,
    ActionRequired,
    Stale,
    /// The workflow file itself was invalid; such runs can never be rerun.
    StartupFailure,
    #[serde(other)]
    Unknown,
}

/// A workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: u64,
    pub status: RunStatus,
    #[serde(default)]
    pub conclusion: Option<RunConclusion>,
    /// Workflow name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_title: Option<String>,
    #[serde(default)]
    pub head_branch: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Run {
    pub fn new(id: u64, status: RunStatus, conclusion: Option<RunConclusion>) -> Self {
        Self {
            id,
            status,
            conclusion,
            name: None,
            display_title: None,
            head_branch: None,
            event: None,
            created_at: None,
        }
    }

    /// Whether the run belongs in the interactive rerun candidate list.
    ///
    /// Only completed runs qualify, and neither successful runs nor runs that
    /// failed at startup are offered.
    pub fn is_rerun_candidate(&self) -> bool {
        if self.status != RunStatus::Completed {
            return false;
        }
        !matches!(self.conclusion, Some(RunConclusion::Success | RunConclusion::StartupFailure))
    }

    pub fn title(&self) -> &str {
        self.display_title.as_deref().or(self.name.as_deref()).unwrap_or_default()
    }

    pub fn workflow_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A single job within a workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub id: u64,
    pub run_id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Keep rerun candidates in API order, capped at `limit`.
pub fn select_rerun_candidates<I>(runs: I, limit: usize) -> Vec<Run>
where
    I: IntoIterator<Item = Run>,
{
    runs.into_iter().filter(Run::is_rerun_candidate).take(limit).collect()
}
