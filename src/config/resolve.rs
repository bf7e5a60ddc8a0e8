//! Effective settings for the create flow
//!
//! Precedence: explicit flag → environment → stored settings → default.

use std::path::PathBuf;

use super::Settings;
use crate::error::{Error, Result};

/// Environment variable consulted for the token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Base directory used when neither a flag nor the config names one
pub const FALLBACK_BASE_DIRECTORY: &str = ".";

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub directory: Option<PathBuf>,
    pub private: bool,
    pub public: bool,
}

/// Fully resolved settings for one create run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    pub token: String,
    pub base_directory: PathBuf,
    pub private: bool,
}

/// Read the token fallback from the environment
pub fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV).ok()
}

/// Combine flags, environment token and stored settings.
///
/// Empty strings count as absent at every layer.
pub fn resolve(overrides: &Overrides, env_token: Option<&str>, stored: &Settings) -> Result<Effective> {
    let token = overrides
        .token
        .as_deref()
        .filter(|t| !t.is_empty())
        .or_else(|| env_token.filter(|t| !t.is_empty()))
        .or_else(|| stored.token())
        .ok_or(Error::MissingToken)?
        .to_string();

    let base_directory = overrides
        .directory
        .clone()
        .filter(|d| !d.as_os_str().is_empty())
        .or_else(|| {
            stored
                .base_directory
                .clone()
                .filter(|d| !d.as_os_str().is_empty())
        })
        .unwrap_or_else(|| PathBuf::from(FALLBACK_BASE_DIRECTORY));

    // --public wins over --private
    let private = if overrides.public {
        false
    } else if overrides.private {
        true
    } else {
        stored.private
    };

    Ok(Effective {
        token,
        base_directory,
        private,
    })
}
