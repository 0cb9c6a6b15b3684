//! GitHub Actions API port definition.

use crate::domain::{AppError, Job, RerunOperation, Repository, Run};

/// Port for the Actions endpoints used by rerun.
pub trait ActionsApi {
    /// Fetch a single workflow run.
    fn get_run(&self, repo: &Repository, run_id: u64) -> Result<Run, AppError>;

    /// Fetch a single job.
    fn get_job(&self, repo: &Repository, job_id: u64) -> Result<Job, AppError>;

    /// Fetch one page of recent workflow runs, newest first. Pages start at 1.
    fn list_runs(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Run>, AppError>;

    /// Issue a rerun request. Failures carry the HTTP status when there is one.
    fn rerun(&self, repo: &Repository, operation: &RerunOperation) -> Result<(), AppError>;
}
