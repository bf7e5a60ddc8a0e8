//! Interactive configuration for projectinit
//!
//! Equivalent to `projectinit configure`.

use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use projectinit::config::{Settings, configure};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    configure(&Settings::config_file_path()?)?;

    Ok(())
}
