use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, Job, RerunOperation, Repository, Run};
use crate::ports::ActionsApi;

/// In-memory Actions API that records every call it receives.
#[derive(Default)]
pub struct FakeActionsApi {
    runs: HashMap<u64, Run>,
    jobs: HashMap<u64, Job>,
    run_pages: Vec<Vec<Run>>,
    rerun_status: Option<u16>,
    list_status: Option<u16>,
    calls: RefCell<Vec<String>>,
}

impl FakeActionsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.insert(run.id, run);
        self
    }

    pub fn with_job(mut self, job_id: u64, run_id: u64) -> Self {
        self.jobs.insert(job_id, Job { id: job_id, run_id, name: None });
        self
    }

    /// Append a page returned by `list_runs`, in page order.
    pub fn with_run_page(mut self, runs: Vec<Run>) -> Self {
        self.run_pages.push(runs);
        self
    }

    /// Make every rerun call fail with the given HTTP status.
    pub fn failing_rerun(mut self, status: u16) -> Self {
        self.rerun_status = Some(status);
        self
    }

    /// Make every `list_runs` call fail with the given HTTP status.
    pub fn failing_list(mut self, status: u16) -> Self {
        self.list_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn not_found() -> AppError {
        AppError::ApiStatus { status: 404, message: "Not Found".into() }
    }
}

impl ActionsApi for FakeActionsApi {
    fn get_run(&self, repo: &Repository, run_id: u64) -> Result<Run, AppError> {
        self.record(format!("GET repos/{}/actions/runs/{}", repo.full_name(), run_id));
        self.runs.get(&run_id).cloned().ok_or_else(Self::not_found)
    }

    fn get_job(&self, repo: &Repository, job_id: u64) -> Result<Job, AppError> {
        self.record(format!("GET repos/{}/actions/jobs/{}", repo.full_name(), job_id));
        self.jobs.get(&job_id).cloned().ok_or_else(Self::not_found)
    }

    fn list_runs(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Run>, AppError> {
        self.record(format!(
            "GET repos/{}/actions/runs?per_page={}&page={}",
            repo.full_name(),
            per_page,
            page
        ));
        if let Some(status) = self.list_status {
            return Err(AppError::ApiStatus { status, message: "unavailable".into() });
        }
        let index = page.saturating_sub(1) as usize;
        Ok(self.run_pages.get(index).cloned().unwrap_or_default())
    }

    fn rerun(&self, repo: &Repository, operation: &RerunOperation) -> Result<(), AppError> {
        self.record(format!("POST {}", operation.api_path(repo)));
        match self.rerun_status {
            Some(status) => Err(AppError::ApiStatus { status, message: "rejected".into() }),
            None => Ok(()),
        }
    }
}
