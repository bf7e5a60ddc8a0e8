//! Command-line behaviour of the `projectinit` binary
//!
//! Runs the built executable with an isolated config file and no
//! `GITHUB_TOKEN`, checking exit codes and printed output.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;

use projectinit::config::Settings;

async fn projectinit(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_projectinit"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_without_token_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("none.json");

    let output = projectinit(
        &config,
        &["create", "demo", "-d", temp_dir.path().to_str().unwrap()],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GitHub token required"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("demo").exists());
    assert!(!config.exists());
}

#[tokio::test]
async fn test_unreadable_config_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    std::fs::write(&config, "{ not json").unwrap();

    let output = projectinit(&config, &["create", "demo", "-t", "token"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_config_shows_masked_token() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    Settings {
        token: Some("ghp_abcdefghijklmnop".to_string()),
        base_directory: Some(PathBuf::from("/srv/repos")),
        private: true,
    }
    .save_to(&config)
    .unwrap();

    let output = projectinit(&config, &["config"]).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ghp_abcdef..."), "stdout: {stdout}");
    assert!(!stdout.contains("ghp_abcdefghijklmnop"));
    assert!(stdout.contains("/srv/repos"));
    assert!(stdout.contains("\"private\": true"));

    // Showing the config never rewrites it
    let stored = Settings::load_from(&config).unwrap();
    assert_eq!(stored.token(), Some("ghp_abcdefghijklmnop"));
}
