//! Git operations via the `git` CLI
//!
//! - `GitExecutor` - async command runner and availability check
//! - `setup_local_repo` - new working copy with `origin` remote and README

mod executor;
mod local;

pub use executor::*;
pub use local::*;
