use std::cell::Cell;
use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::ports::Console;

const PROGRESS_LABEL: &str = "⏳ Working...";

/// Console backed by the process stdio streams.
///
/// Terminal capabilities are sampled once at construction.
#[derive(Debug)]
pub struct TerminalConsole {
    stdin_tty: bool,
    stdout_tty: bool,
    stderr_tty: bool,
    progress_visible: Cell<bool>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin_tty: io::stdin().is_terminal(),
            stdout_tty: io::stdout().is_terminal(),
            stderr_tty: io::stderr().is_terminal(),
            progress_visible: Cell::new(false),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn can_prompt(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }

    fn is_stdout_tty(&self) -> bool {
        self.stdout_tty
    }

    fn success(&self, message: &str) {
        if self.stdout_tty {
            println!("{} {}", "✓".green(), message);
        } else {
            println!("{}", message);
        }
    }

    fn warning(&self, message: &str) {
        if self.stderr_tty {
            eprintln!("{} {}", "!".yellow(), message);
        } else {
            eprintln!("{}", message);
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.stdout_tty { text.cyan().to_string() } else { text.to_string() }
    }

    fn start_progress(&self) {
        if !self.stderr_tty || self.progress_visible.get() {
            return;
        }
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{}", PROGRESS_LABEL.dark_grey());
        let _ = stderr.flush();
        self.progress_visible.set(true);
    }

    fn stop_progress(&self) {
        if !self.progress_visible.replace(false) {
            return;
        }
        let _ = execute!(io::stderr(), MoveToColumn(0), Clear(ClearType::CurrentLine));
    }
}
