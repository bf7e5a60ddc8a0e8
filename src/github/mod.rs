//! GitHub API access
//!
//! - `GitHubClient` - token-authenticated REST client
//! - `NewRepo` / `CreatedRepo` - request and response shapes for repository creation

mod client;

pub use client::*;
