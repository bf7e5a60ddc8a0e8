//! ProjectInit - create a GitHub repository and a matching local git repo
//!
//! # Modules
//!
//! - [`config`] - Stored settings, interactive configuration, flag precedence
//! - [`github`] - GitHub REST client for repository creation
//! - [`git`] - `git` CLI runner and local working copy setup
//! - [`app`] - The create flow tying the above together
//! - [`error`] - Error types

pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod github;

pub use app::{CreateOutcome, CreateRequest, Creator};
pub use config::{Overrides, Settings};
pub use error::{Error, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
