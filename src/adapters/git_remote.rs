use std::path::PathBuf;

use git2::Repository as GitRepository;

use crate::domain::{AppError, Repository};

const ORIGIN: &str = "origin";

/// Reads the GitHub repository from the local checkout's `origin` remote.
#[derive(Debug, Clone)]
pub struct GitRemoteAdapter {
    root: PathBuf,
}

impl GitRemoteAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<GitRepository, AppError> {
        GitRepository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.message().to_string(),
        })
    }

    /// Resolve the repository the `origin` remote points at.
    pub fn origin_repository(&self) -> Result<Repository, AppError> {
        let repo = self.repo()?;
        let remote = repo.find_remote(ORIGIN).map_err(|e| AppError::GitError {
            command: format!("git2::Repository::find_remote({})", ORIGIN),
            details: e.message().to_string(),
        })?;
        let url = remote.url().ok_or_else(|| AppError::GitError {
            command: "git2::Remote::url".to_string(),
            details: "remote URL is not valid UTF-8".to_string(),
        })?;

        log::debug!("origin remote: {}", url);
        Repository::from_remote_url(url)
    }
}
