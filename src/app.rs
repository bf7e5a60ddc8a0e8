//! Create flow orchestration
//!
//! resolve settings → check git → create remote → set up local working copy.
//! Any failure aborts; a remote created before the failure is left in place.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Effective, Overrides, Settings, resolve};
use crate::error::Result;
use crate::git::{GitExecutor, setup_local_repo};
use crate::github::{CreatedRepo, DEFAULT_API_URL, GitHubClient, NewRepo};

/// What the user asked to create
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub repo_name: String,
    pub description: String,
    pub overrides: Overrides,
}

/// Result of a successful create run
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub repo_path: PathBuf,
    pub remote: CreatedRepo,
}

/// Runs the create flow against a GitHub API root and a git binary
pub struct Creator {
    api_url: String,
    git: GitExecutor,
}

impl Creator {
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            git: GitExecutor::new(),
        }
    }

    /// Use a different GitHub API root
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Use a specific git executor
    pub fn with_git(mut self, git: GitExecutor) -> Self {
        self.git = git;
        self
    }

    /// Resolve effective settings and make sure git is usable.
    ///
    /// Nothing remote or on disk is touched yet.
    pub async fn prepare(
        &self,
        request: &CreateRequest,
        env_token: Option<&str>,
        settings: &Settings,
    ) -> Result<Effective> {
        let effective = resolve(&request.overrides, env_token, settings)?;
        self.git.check_installed().await?;
        Ok(effective)
    }

    /// Create the remote repository, then the local working copy
    pub async fn execute(&self, request: &CreateRequest, effective: &Effective) -> Result<CreateOutcome> {
        let client =
            GitHubClient::new(effective.token.as_str())?.with_base_url(self.api_url.as_str());
        let remote = client
            .create_repo(&NewRepo {
                name: request.repo_name.clone(),
                description: request.description.clone(),
                private: effective.private,
            })
            .await?;
        info!("Created remote repository {}", remote.html_url);

        let repo_path = setup_local_repo(
            &self.git,
            &effective.base_directory,
            &request.repo_name,
            &remote.clone_url,
        )
        .await?;

        Ok(CreateOutcome { repo_path, remote })
    }

    /// [`prepare`](Self::prepare) followed by [`execute`](Self::execute)
    pub async fn run(
        &self,
        request: &CreateRequest,
        env_token: Option<&str>,
        settings: &Settings,
    ) -> Result<CreateOutcome> {
        let effective = self.prepare(request, env_token, settings).await?;
        self.execute(request, &effective).await
    }
}

impl Default for Creator {
    fn default() -> Self {
        Self::new()
    }
}
