//! Console port: terminal capabilities and user-facing output.

/// Where rerun reports progress and results.
///
/// Terminal detection lives behind this trait so command logic can be
/// exercised without a real terminal.
pub trait Console {
    /// Both stdin and stdout are attached to a terminal.
    fn can_prompt(&self) -> bool;

    fn is_stdout_tty(&self) -> bool;

    /// Print a success line on stdout.
    fn success(&self, message: &str);

    /// Print a warning line on stderr.
    fn warning(&self, message: &str);

    /// Emphasize an identifier inside a message.
    fn highlight(&self, text: &str) -> String;

    fn start_progress(&self);

    fn stop_progress(&self);
}
