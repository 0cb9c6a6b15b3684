use std::cell::RefCell;

use crate::domain::{AppError, Run};
use crate::ports::RunPicker;

/// Picker that chooses a fixed index, or cancels when none is set.
#[derive(Default)]
pub struct FakeRunPicker {
    choice: Option<usize>,
    offered: RefCell<Vec<u64>>,
}

impl FakeRunPicker {
    pub fn choosing(index: usize) -> Self {
        Self { choice: Some(index), offered: RefCell::default() }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }

    /// IDs of the runs presented on the last prompt.
    pub fn offered(&self) -> Vec<u64> {
        self.offered.borrow().clone()
    }
}

impl RunPicker for FakeRunPicker {
    fn pick_run(&self, runs: &[Run]) -> Result<u64, AppError> {
        *self.offered.borrow_mut() = runs.iter().map(|run| run.id).collect();
        self.choice
            .and_then(|index| runs.get(index))
            .map(|run| run.id)
            .ok_or_else(|| AppError::Prompt("no run selected".to_string()))
    }
}
