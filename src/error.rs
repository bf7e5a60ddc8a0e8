//! Error types for projectinit
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `Display` and `Error` impls.
//! Every error is fatal: the binaries print the report and exit with status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for projectinit
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "GitHub token required. Set it by running: project-configs \
         (or provide it via -t/--token or the GITHUB_TOKEN environment variable)"
    )]
    MissingToken,

    #[error("Local directory '{}' already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// GitHub API errors
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Error creating GitHub repository: {status}\n{body}")]
    Api { status: u16, body: String },

    #[error("Request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response from GitHub: {0}")]
    InvalidResponse(String),
}

/// Git subprocess errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git is not installed or not in PATH")]
    NotInstalled,

    #[error("Error running command: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(PathBuf),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
