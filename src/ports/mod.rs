mod actions_api;
mod console;
mod run_picker;

pub use actions_api::ActionsApi;
pub use console::Console;
pub use run_picker::RunPicker;
