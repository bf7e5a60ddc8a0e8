//! Local working copy setup

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::GitExecutor;
use crate::error::{Error, Result};

/// Name of the remote registered for the new repository
pub const REMOTE_NAME: &str = "origin";

/// Contents of the placeholder README
pub fn readme_contents(repo_name: &str) -> String {
    format!("# {}\n\nInitial repository setup.\n", repo_name)
}

/// Create `base_dir/repo_name`, initialize git there, register `remote_url`
/// as `origin` and write a README.
///
/// Fails without touching anything if the target directory already exists.
pub async fn setup_local_repo(
    git: &GitExecutor,
    base_dir: &Path,
    repo_name: &str,
    remote_url: &str,
) -> Result<PathBuf> {
    let repo_path = base_dir.join(repo_name);

    if tokio::fs::try_exists(&repo_path).await? {
        return Err(Error::DirectoryExists(repo_path));
    }

    info!("Creating directory {:?}", repo_path);
    tokio::fs::create_dir_all(&repo_path).await?;

    git.init(&repo_path).await?;

    info!("Adding remote '{}': {}", REMOTE_NAME, remote_url);
    git.add_remote(&repo_path, REMOTE_NAME, remote_url).await?;

    tokio::fs::write(repo_path.join("README.md"), readme_contents(repo_name)).await?;
    debug!("Local repository ready at {:?}", repo_path);

    Ok(repo_path)
}
