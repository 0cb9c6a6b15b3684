//! runctl: request reruns of GitHub Actions workflow runs and jobs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{RerunOptions, RerunOutcome, rerun};
pub use domain::{AppError, RerunTarget, Repository};
