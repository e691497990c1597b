//! site-build: resolve a site configuration and hand it to the build
//! pipeline.
//!
//! Startup is fail-fast: any resolution error aborts the process before
//! build work begins.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use site_build::{load_config, observability, pipeline};

#[derive(Parser)]
#[command(name = "site-build")]
#[command(about = "Static-site build configuration front-end", long_about = None)]
struct Cli {
    /// Path to the site configuration file.
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Emit machine-readable JSON instead of log lines.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate the configuration without building
    Check,
    /// Resolve the configuration and hand it to the build pipeline
    Build,
}

fn main() -> ExitCode {
    observability::logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "aborting before build");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;

    tracing::info!(
        site = %config.site_origin(),
        base = %config.base_path(),
        output = %config.output_mode(),
        integrations = config.extensions().len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Check => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config.summary())?);
            } else {
                println!("{} ok", cli.config.display());
            }
        }
        Commands::Build => {
            // Ownership transfer: the config is consumed exactly once.
            let plan = pipeline::run(config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!(
                    "configured {} build of {}{} ({} content formats, {} artifacts)",
                    plan.output_mode,
                    plan.site_origin,
                    plan.routes_root,
                    plan.content_formats.len(),
                    plan.artifacts.len()
                );
            }
        }
    }

    Ok(())
}
