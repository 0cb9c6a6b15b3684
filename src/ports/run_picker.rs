use crate::domain::{AppError, Run};

/// Interactive selection of one run from a candidate list.
pub trait RunPicker {
    /// Return the ID of the chosen run.
    fn pick_run(&self, runs: &[Run]) -> Result<u64, AppError>;
}
