use std::cell::{Cell, RefCell};

use crate::ports::Console;

/// Console that captures output instead of writing to a terminal.
#[derive(Default)]
pub struct FakeConsole {
    can_prompt: bool,
    stdout_tty: bool,
    successes: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    progress_depth: Cell<i32>,
    progress_starts: Cell<usize>,
}

impl FakeConsole {
    /// No terminal attached: no prompting, stdout piped.
    pub fn piped() -> Self {
        Self::default()
    }

    /// Fully interactive terminal.
    pub fn interactive() -> Self {
        Self { can_prompt: true, stdout_tty: true, ..Self::default() }
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// Indicators currently shown; zero once every start has been stopped.
    pub fn progress_depth(&self) -> i32 {
        self.progress_depth.get()
    }

    pub fn progress_starts(&self) -> usize {
        self.progress_starts.get()
    }
}

impl Console for FakeConsole {
    fn can_prompt(&self) -> bool {
        self.can_prompt
    }

    fn is_stdout_tty(&self) -> bool {
        self.stdout_tty
    }

    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }

    fn start_progress(&self) {
        self.progress_depth.set(self.progress_depth.get() + 1);
        self.progress_starts.set(self.progress_starts.get() + 1);
    }

    fn stop_progress(&self) {
        self.progress_depth.set(self.progress_depth.get() - 1);
    }
}
