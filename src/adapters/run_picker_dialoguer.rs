//! Interactive run selection using dialoguer.

use chrono::{DateTime, Utc};
use dialoguer::Select;

use crate::domain::{AppError, Run, RunConclusion, RunStatus};
use crate::ports::RunPicker;

#[derive(Debug, Clone, Default)]
pub struct DialoguerRunPicker;

impl DialoguerRunPicker {
    pub fn new() -> Self {
        Self
    }
}

impl RunPicker for DialoguerRunPicker {
    fn pick_run(&self, runs: &[Run]) -> Result<u64, AppError> {
        let now = Utc::now();
        let items: Vec<String> = runs.iter().map(|run| run_label(run, now)).collect();

        let selection = Select::new()
            .with_prompt("Select a run")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to select run: {}", err)))?;

        let index = selection.ok_or_else(|| AppError::Prompt("no run selected".to_string()))?;
        runs.get(index)
            .map(|run| run.id)
            .ok_or_else(|| AppError::Prompt(format!("selection {} out of range", index)))
    }
}

fn status_mark(run: &Run) -> &'static str {
    if run.status != RunStatus::Completed {
        return "*";
    }
    match run.conclusion {
        Some(RunConclusion::Success) => "✓",
        Some(RunConclusion::Failure | RunConclusion::TimedOut | RunConclusion::StartupFailure) => {
            "X"
        }
        Some(RunConclusion::ActionRequired) => "!",
        Some(
            RunConclusion::Cancelled
            | RunConclusion::Skipped
            | RunConclusion::Neutral
            | RunConclusion::Stale,
        ) => "-",
        Some(RunConclusion::Unknown) | None => "?",
    }
}

/// One picker line: mark, title, workflow, branch, event, age and ID in
/// columns separated by two spaces. Missing details are skipped.
pub(crate) fn run_label(run: &Run, now: DateTime<Utc>) -> String {
    let mut columns = vec![status_mark(run).to_string()];
    if !run.title().is_empty() {
        columns.push(run.title().to_string());
    }
    if !run.workflow_name().is_empty() && run.workflow_name() != run.title() {
        columns.push(run.workflow_name().to_string());
    }
    if let Some(branch) = run.head_branch.as_deref().filter(|branch| !branch.is_empty()) {
        columns.push(format!("[{}]", branch));
    }
    if let Some(event) = run.event.as_deref().filter(|event| !event.is_empty()) {
        columns.push(event.to_string());
    }
    if let Some(created_at) = run.created_at {
        columns.push(relative_age(now, created_at));
    }
    columns.push(run.id.to_string());
    columns.join("  ")
}

fn relative_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    match seconds {
        s if s < 1 => "just now".to_string(),
        s if s < 60 => format!("{}s ago", s),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}
