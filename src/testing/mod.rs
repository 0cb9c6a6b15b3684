mod fake_actions_api;
mod fake_console;
mod fake_run_picker;

pub use fake_actions_api::FakeActionsApi;
pub use fake_console::FakeConsole;
pub use fake_run_picker::FakeRunPicker;

use crate::domain::{Repository, Run, RunConclusion, RunStatus};

pub fn test_repo() -> Repository {
    Repository::new("github.com", "octo", "widgets")
}

pub fn completed_run(id: u64, conclusion: RunConclusion) -> Run {
    Run::new(id, RunStatus::Completed, Some(conclusion))
}
