//! ProjectInit - create a GitHub repository and initialize a local git repo
//!
//! Run with `projectinit create <name>` or `projectinit --help` for usage.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use projectinit::{
    APP_NAME, VERSION,
    app::CreateOutcome,
    config::{Effective, Overrides, Settings, configure, env_token, mask_token},
    CreateRequest, Creator,
};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Create a GitHub repository and initialize a local git repo")]
#[command(after_help = "Run 'project-configs' to set default values for token and base directory")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the GitHub repository and the local working copy
    Create {
        /// Name of the repository to create
        repo_name: String,

        /// Base directory where the repo folder will be created (overrides config)
        #[arg(short = 'd', long)]
        directory: Option<PathBuf>,

        /// GitHub personal access token (overrides config and GITHUB_TOKEN env var)
        #[arg(short, long)]
        token: Option<String>,

        /// Repository description
        #[arg(long, default_value = "")]
        description: String,

        /// Make the repository private (overrides config default)
        #[arg(short, long)]
        private: bool,

        /// Make the repository public (overrides config default)
        #[arg(long)]
        public: bool,
    },

    /// Interactively set the default token, base directory and visibility
    Configure,

    /// Show the stored configuration
    Config,
}

fn setup_logging(debug: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if debug => EnvFilter::new("debug")
            .add_directive("hyper_util=info".parse()?)
            .add_directive("rustls=info".parse()?),
        // User-facing output goes through println; logs stay quiet by default
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    Ok(())
}

/// Print what is about to be created
fn print_plan(request: &CreateRequest, effective: &Effective) {
    println!("Creating GitHub repository: {}", request.repo_name);
    println!("Base directory: {}", effective.base_directory.display());
    println!(
        "Visibility: {}",
        if effective.private { "Private" } else { "Public" }
    );
}

/// Print the success summary and suggested next steps
fn print_summary(outcome: &CreateOutcome) {
    let path = outcome.repo_path.display();
    println!("Repository created: {}", outcome.remote.html_url);
    println!("\n✓ Successfully created repository!");
    println!("  Local path: {}", path);
    println!("  Remote URL: {}", outcome.remote.html_url);
    println!("\nNext steps:");
    println!("  cd {}", path);
    println!("  git add .");
    println!("  git commit -m 'Initial commit'");
    println!("  git push -u origin main");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.debug)?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::config_file_path()?,
    };
    debug!("Using config file {:?}", config_path);

    match cli.command {
        Commands::Create {
            repo_name,
            directory,
            token,
            description,
            private,
            public,
        } => {
            let settings = Settings::load_from(&config_path)?;
            let request = CreateRequest {
                repo_name,
                description,
                overrides: Overrides {
                    token,
                    directory,
                    private,
                    public,
                },
            };

            let creator = Creator::new();
            let effective = creator
                .prepare(&request, env_token().as_deref(), &settings)
                .await?;
            print_plan(&request, &effective);

            let outcome = creator.execute(&request, &effective).await?;
            print_summary(&outcome);
        }

        Commands::Configure => {
            configure(&config_path)?;
        }

        Commands::Config => {
            let settings = Settings::load_from(&config_path)?;
            let shown = Settings {
                token: settings.token().map(|t| mask_token(Some(t))),
                ..settings
            };
            println!("Configuration:");
            println!("{}", serde_json::to_string_pretty(&shown)?);
            println!("\nConfig file: {}", config_path.display());
        }
    }

    Ok(())
}
