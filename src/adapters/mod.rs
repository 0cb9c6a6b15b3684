pub mod actions_client_http;
pub mod git_remote;
pub mod run_picker_dialoguer;
pub mod terminal_console;

pub use actions_client_http::HttpActionsClient;
pub use git_remote::GitRemoteAdapter;
pub use run_picker_dialoguer::DialoguerRunPicker;
pub use terminal_console::TerminalConsole;
