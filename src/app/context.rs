use crate::domain::Repository;
use crate::ports::{ActionsApi, Console, RunPicker};

/// Application context holding dependencies for command execution.
pub struct AppContext<A: ActionsApi, P: RunPicker, C: Console> {
    repository: Repository,
    api: A,
    picker: P,
    console: C,
}

impl<A: ActionsApi, P: RunPicker, C: Console> AppContext<A, P, C> {
    /// Create a new application context.
    pub fn new(repository: Repository, api: A, picker: P, console: C) -> Self {
        Self { repository, api, picker, console }
    }

    /// Repository the command operates on.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Get a reference to the Actions API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get a reference to the interactive run picker.
    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Get a reference to the console.
    pub fn console(&self) -> &C {
        &self.console
    }
}
