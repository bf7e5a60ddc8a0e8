//! Async git command executor
//!
//! Runs the `git` binary with an argv vector (never through a shell) and
//! turns non-zero exits into [`GitError::CommandFailed`].

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::error::{GitError, Result};

/// Default git program name, looked up on `PATH`
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Async git command executor
#[derive(Debug, Clone)]
pub struct GitExecutor {
    program: PathBuf,
}

impl GitExecutor {
    /// Create an executor for the `git` on `PATH`
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GIT_PROGRAM)
    }

    /// Create an executor for a specific git binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if git is installed and runnable
    pub async fn check_installed(&self) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|_| GitError::NotInstalled)?;

        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout);
            debug!("git version: {}", version.trim());
            Ok(())
        } else {
            Err(GitError::NotInstalled.into())
        }
    }

    /// Execute a git command inside `cwd` and return its trimmed stdout
    #[instrument(skip(self), fields(args = ?args, cwd = %cwd.display()))]
    pub async fn execute(&self, args: &[&str], cwd: &Path) -> Result<String> {
        let command = format!("git {}", args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                warn!("git command failed to start: {}", e);
                GitError::CommandFailed {
                    command: command.clone(),
                    stderr: e.to_string(),
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(GitError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }

    /// `git init`
    pub async fn init(&self, dir: &Path) -> Result<()> {
        self.execute(&["init"], dir).await?;
        Ok(())
    }

    /// `git remote add <name> <url>`
    pub async fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()> {
        self.execute(&["remote", "add", name, url], dir).await?;
        Ok(())
    }
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}
