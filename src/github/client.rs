//! GitHub REST client
//!
//! Only one endpoint is needed: create a repository for the authenticated user.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{GitHubError, Result};

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested from the API
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Request body for `POST /user/repos`
#[derive(Debug, Clone, Serialize)]
pub struct NewRepo {
    pub name: String,
    pub description: String,
    pub private: bool,
}

/// URLs of a freshly created repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRepo {
    /// Address registered as the `origin` remote
    pub clone_url: String,
    /// Browser-facing page
    pub html_url: String,
}

/// Authenticated GitHub API client
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GitHubError::Request)?;

        Ok(Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point the client at another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a repository owned by the token's user
    ///
    /// Only `201 Created` counts as success; anything else is reported with the
    /// raw response body.
    #[instrument(skip_all, fields(name = %repo.name, private = repo.private))]
    pub async fn create_repo(&self, repo: &NewRepo) -> Result<CreatedRepo> {
        let url = format!("{}/user/repos", self.base_url);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_HEADER)
            .json(repo)
            .send()
            .await
            .map_err(GitHubError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(GitHubError::Request)?;
        debug!("GitHub responded {}", status);

        Ok(parse_create_response(status, &body)?)
    }
}

/// Turn a create-repository response into URLs or an error
fn parse_create_response(
    status: StatusCode,
    body: &str,
) -> std::result::Result<CreatedRepo, GitHubError> {
    if status != StatusCode::CREATED {
        return Err(GitHubError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| GitHubError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_repo_body() {
        let repo = NewRepo {
            name: "demo".to_string(),
            description: "A demo".to_string(),
            private: true,
        };
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "demo", "description": "A demo", "private": true})
        );
    }

    #[test]
    fn test_created_returns_urls_unchanged() {
        let body = r#"{
            "id": 1,
            "name": "demo",
            "clone_url": "https://github.com/octocat/demo.git",
            "html_url": "https://github.com/octocat/demo",
            "private": false
        }"#;
        let created = parse_create_response(StatusCode::CREATED, body).unwrap();
        assert_eq!(created.clone_url, "https://github.com/octocat/demo.git");
        assert_eq!(created.html_url, "https://github.com/octocat/demo");
    }

    #[test]
    fn test_ok_is_not_created() {
        let body = r#"{"clone_url": "x", "html_url": "y"}"#;
        let err = parse_create_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 200, .. }));
    }

    #[test]
    fn test_error_status_keeps_body() {
        let body = r#"{"message":"name already exists on this account"}"#;
        match parse_create_response(StatusCode::UNPROCESSABLE_ENTITY, body).unwrap_err() {
            GitHubError::Api { status, body: got } => {
                assert_eq!(status, 422);
                assert_eq!(got, body);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_created_with_bad_body() {
        let err = parse_create_response(StatusCode::CREATED, "{}").unwrap_err();
        assert!(matches!(err, GitHubError::InvalidResponse(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GitHubClient::new("t")
            .unwrap()
            .with_base_url("http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
