//! Shared testing utilities for runctl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host state into the binary under test.
const ISOLATED_ENV: [&str; 6] =
    ["GH_TOKEN", "GITHUB_TOKEN", "GH_REPO", "RUNCTL_API_URL", "RUNCTL_CONFIG", "RUST_LOG"];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `runctl` binary with no credentials.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("runctl").expect("Failed to locate runctl binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home());
        for name in ISOLATED_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Build a command pointed at a mock API server for `octo/widgets`.
    pub fn cli_against(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GH_TOKEN", "test-token")
            .env("RUNCTL_API_URL", api_url)
            .env("GH_REPO", "octo/widgets");
        cmd
    }

    /// Write `$HOME/.config/runctl/config.toml`.
    pub fn write_config(&self, content: &str) {
        let dir = self.home().join(".config").join("runctl");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config.toml");
    }

    /// Turn the work directory into a git checkout with the given `origin`.
    pub fn init_git_with_origin(&self, url: &str) {
        let repo = git2::Repository::init(self.work_dir()).expect("git init failed");
        repo.remote("origin", url).expect("git remote add failed");
    }
}
