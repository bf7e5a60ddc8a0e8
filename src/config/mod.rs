//! Configuration module
//!
//! Handles:
//! - The stored settings record (`<config dir>/projectinit/config.json`)
//! - Interactive editing of that record
//! - Flag/environment/config precedence for the create flow

mod configure;
mod resolve;
mod settings;

pub use configure::*;
pub use resolve::*;
pub use settings::*;
