pub mod config;
pub mod error;
pub mod repository;
pub mod rerun;
pub mod run;

pub use config::{ApiConfig, AppConfig};
pub use error::AppError;
pub use repository::Repository;
pub use rerun::{RerunOperation, RerunTarget, TargetResolution, resolve_target};
pub use run::{Job, Run, RunConclusion, RunStatus, select_rerun_candidates};
