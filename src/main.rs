use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use versionize::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
use versionize::config;
use versionize::ui;
use versionize::ReleaseType;

/// Environment variable holding the log filter
const LOG_ENV: &str = "VERSIONIZE_LOG";

#[derive(clap::Parser)]
#[command(
    name = "versionize",
    version,
    about = "CLI to versionize packages according to semver"
)]
struct Args {
    #[arg(
        value_parser = PossibleValuesParser::new(["latest", "stable", "hotfix"]),
        help = "Determines the new version. If not given, the current version is displayed"
    )]
    release_type: Option<String>,

    #[arg(long, help = "Print only the version, without decoration")]
    raw: bool,

    #[arg(long, help = "Commit the changed files as v<version>")]
    commit: bool,

    #[arg(long, help = "Commit the changed files and tag the commit as v<version>")]
    tag: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            ui::display_result(&result, args.raw);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn run(args: &Args) -> Result<WorkflowResult> {
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow!("Cannot determine working directory: {}", e))?;
    let config = config::load_config(args.config.as_deref(), &cwd)?;

    let release = args
        .release_type
        .as_deref()
        .map(str::parse::<ReleaseType>)
        .transpose()?;

    let workflow_args = BumpWorkflowArgs {
        release,
        commit: args.commit,
        tag: args.tag,
        cwd,
    };

    Ok(run_bump_workflow(&workflow_args, &config)?)
}
