//! Rerun a workflow run, its failed jobs, or a single job.

use crate::app::AppContext;
use crate::domain::{
    AppError, RerunOperation, RerunTarget, Repository, Run, resolve_target, select_rerun_candidates,
};
use crate::ports::{ActionsApi, Console, RunPicker};

/// Most candidates offered by the interactive picker.
pub const CANDIDATE_LIMIT: usize = 10;
const PAGE_SIZE: u32 = 100;
const MAX_PAGES: u32 = 10;

/// What was requested, for callers that want more than the printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerunOutcome {
    Run { run_id: u64, only_failed: bool },
    Job { job_id: u64, run_id: u64 },
}

/// Resolve command-line identifiers into a target, warning when a run ID is dropped.
pub fn resolve(
    console: &impl Console,
    run_id: Option<&str>,
    job_id: Option<&str>,
) -> Result<RerunTarget, AppError> {
    let resolution = resolve_target(run_id, job_id, console.can_prompt())?;
    if resolution.ignored_run_id && console.can_prompt() {
        console.warning("both run and job IDs specified; ignoring run ID");
    }
    Ok(resolution.target)
}

pub fn execute<A, P, C>(
    ctx: &AppContext<A, P, C>,
    target: RerunTarget,
    only_failed: bool,
) -> Result<RerunOutcome, AppError>
where
    A: ActionsApi,
    P: RunPicker,
    C: Console,
{
    log::debug!("rerun target {:?} in {}", target, ctx.repository());

    let run_id = match target {
        RerunTarget::Job(job_id) => return rerun_job(ctx, job_id),
        RerunTarget::Run(run_id) => run_id,
        RerunTarget::Interactive => prompt_for_run(ctx)?,
    };
    rerun_run(ctx, run_id, only_failed)
}

fn rerun_job<A, P, C>(ctx: &AppContext<A, P, C>, job_id: u64) -> Result<RerunOutcome, AppError>
where
    A: ActionsApi,
    P: RunPicker,
    C: Console,
{
    let repo = ctx.repository();
    let job = with_progress(ctx.console(), || ctx.api().get_job(repo, job_id))
        .map_err(|e| AppError::lookup("job", e))?;

    let operation = RerunOperation::Job { job_id: job.id };
    ctx.api().rerun(repo, &operation).map_err(|e| operation.rejection(e))?;
    log::info!("requested rerun of job {} on run {}", job.id, job.run_id);

    let console = ctx.console();
    if console.is_stdout_tty() {
        console.success(&format!(
            "Requested rerun of job {} on run {}",
            console.highlight(&job.id.to_string()),
            console.highlight(&job.run_id.to_string())
        ));
    }

    Ok(RerunOutcome::Job { job_id: job.id, run_id: job.run_id })
}

fn rerun_run<A, P, C>(
    ctx: &AppContext<A, P, C>,
    run_id: u64,
    only_failed: bool,
) -> Result<RerunOutcome, AppError>
where
    A: ActionsApi,
    P: RunPicker,
    C: Console,
{
    let repo = ctx.repository();
    let run = with_progress(ctx.console(), || ctx.api().get_run(repo, run_id))
        .map_err(|e| AppError::lookup("run", e))?;

    let operation = RerunOperation::Run { run_id: run.id, only_failed };
    ctx.api().rerun(repo, &operation).map_err(|e| operation.rejection(e))?;
    log::info!("requested {} of run {}", operation.verb(), run.id);

    let console = ctx.console();
    if console.is_stdout_tty() {
        let scope = if only_failed { "(failed jobs) " } else { "" };
        console.success(&format!(
            "Requested rerun {}of run {}",
            scope,
            console.highlight(&run.id.to_string())
        ));
    }

    Ok(RerunOutcome::Run { run_id: run.id, only_failed })
}

fn prompt_for_run<A, P, C>(ctx: &AppContext<A, P, C>) -> Result<u64, AppError>
where
    A: ActionsApi,
    P: RunPicker,
    C: Console,
{
    let runs = find_rerun_candidates(ctx.api(), ctx.repository(), CANDIDATE_LIMIT)
        .map_err(|e| AppError::lookup("runs", e))?;
    if runs.is_empty() {
        return Err(AppError::NoFailedRuns);
    }
    ctx.picker().pick_run(&runs)
}

/// Page through recent runs until `limit` rerun candidates are found.
pub fn find_rerun_candidates(
    api: &impl ActionsApi,
    repo: &Repository,
    limit: usize,
) -> Result<Vec<Run>, AppError> {
    let mut candidates = Vec::new();
    for page in 1..=MAX_PAGES {
        let runs = api.list_runs(repo, page, PAGE_SIZE)?;
        let exhausted = runs.len() < PAGE_SIZE as usize;
        candidates.extend(select_rerun_candidates(runs, limit - candidates.len()));
        if exhausted || candidates.len() >= limit {
            break;
        }
    }
    Ok(candidates)
}

/// Show the progress indicator for the duration of `call`.
fn with_progress<C, T, F>(console: &C, call: F) -> T
where
    C: Console,
    F: FnOnce() -> T,
{
    let _guard = ProgressGuard::start(console);
    call()
}

struct ProgressGuard<'a, C: Console> {
    console: &'a C,
}

impl<'a, C: Console> ProgressGuard<'a, C> {
    fn start(console: &'a C) -> Self {
        console.start_progress();
        Self { console }
    }
}

impl<C: Console> Drop for ProgressGuard<'_, C> {
    fn drop(&mut self) {
        self.console.stop_progress();
    }
}
