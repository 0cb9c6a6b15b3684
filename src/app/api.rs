//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{DialoguerRunPicker, GitRemoteAdapter, HttpActionsClient, TerminalConsole};
use crate::app::config::{load_config, load_token};
use crate::app::{AppContext, commands::rerun};
use crate::domain::Repository;

pub use crate::app::commands::rerun::RerunOutcome;
pub use crate::domain::AppError;

/// Options for [`rerun`], as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RerunOptions {
    /// Positional run ID.
    pub run_id: Option<String>,
    /// `--job` value; wins over `run_id`.
    pub job_id: Option<String>,
    /// Rerun only the failed jobs of the run.
    pub only_failed: bool,
    /// `[HOST/]OWNER/REPO` override; the `origin` remote is used when absent.
    pub repo: Option<String>,
}

/// Request a rerun of a workflow run or job.
pub fn rerun(options: RerunOptions) -> Result<RerunOutcome, AppError> {
    let console = TerminalConsole::new();
    let target = rerun::resolve(&console, options.run_id.as_deref(), options.job_id.as_deref())?;

    let config = load_config()?;
    let token = load_token()?;
    let repository = base_repo(options.repo.as_deref(), std::env::current_dir()?)
        .map_err(|e| AppError::BaseRepo { source: Box::new(e) })?;
    log::debug!("base repository: {}", repository);

    let base_url = config.api.base_url_for(&repository)?;
    let client = HttpActionsClient::new(token, base_url, &config.api)?;
    let ctx = AppContext::new(repository, client, DialoguerRunPicker::new(), console);

    rerun::execute(&ctx, target, options.only_failed)
}

fn base_repo(explicit: Option<&str>, cwd: PathBuf) -> Result<Repository, AppError> {
    match explicit.filter(|value| !value.trim().is_empty()) {
        Some(value) => Repository::parse(value),
        None => GitRemoteAdapter::new(cwd).origin_repository(),
    }
}
