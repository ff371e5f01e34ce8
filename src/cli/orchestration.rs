//! Main workflow orchestration logic
//!
//! Ties a bump to the optional commit/tag step. It provides a clean
//! separation between CLI argument parsing and business logic: `main.rs`
//! only parses arguments and prints, everything else happens here.

use std::path::{Path, PathBuf};

use semver::Version;

use crate::boundary::PublishWarning;
use crate::bump::{BumpResult, Versionizer};
use crate::config::{Config, GitConfig};
use crate::domain::ReleaseType;
use crate::error::Result;
use crate::git::{Git2Vcs, Vcs};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// `None` only queries the current version
    pub release: Option<ReleaseType>,

    /// Commit the touched records
    pub commit: bool,

    /// Commit and tag the touched records
    pub tag: bool,

    /// Directory the project root is searched from
    pub cwd: PathBuf,
}

/// What version control should do after a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    Skip,
    Commit,
    CommitAndTag,
}

impl PublishMode {
    /// Combine CLI flags with configured defaults. Tagging implies committing.
    pub fn resolve(commit: bool, tag: bool, git: &GitConfig) -> Self {
        if tag || git.tag {
            PublishMode::CommitAndTag
        } else if commit || git.commit {
            PublishMode::Commit
        } else {
            PublishMode::Skip
        }
    }
}

/// What the workflow did to the records
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Read-only query
    Current(Version),
    Bumped(BumpResult),
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: WorkflowOutcome,

    /// Non-fatal problems from the version-control step
    pub warnings: Vec<PublishWarning>,
}

/// Stage the touched records, commit them and optionally tag the commit.
///
/// Commit message and tag name are both `<tag_prefix><new_version>`.
pub fn publish(
    vcs: &impl Vcs,
    result: &BumpResult,
    mode: PublishMode,
    git: &GitConfig,
) -> Result<()> {
    if mode == PublishMode::Skip {
        return Ok(());
    }

    let label = git.label(&result.new_version);
    vcs.stage(&result.touched_paths())?;
    vcs.commit(&label)?;

    if mode == PublishMode::CommitAndTag {
        vcs.tag(&label)?;
    }

    Ok(())
}

/// Main bump workflow, using git through `git2`
///
/// Orchestrates the whole process:
/// 1. Load and validate the version pair
/// 2. Without a release type, return the current version
/// 3. Otherwise increment and write both records
/// 4. Commit and tag if requested
///
/// # Arguments
///
/// * `args` - Workflow arguments (release type, commit, tag, cwd)
/// * `config` - Versionize configuration
///
/// # Returns
///
/// The outcome plus any warnings, or the error that stopped the bump
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    run_bump_workflow_with(args, config, |root| Git2Vcs::open(root))
}

/// [run_bump_workflow] with a caller-provided way to open version control
///
/// Errors from `open_vcs` or from the [Vcs] operations are turned into
/// warnings: the records are already written at that point and stay so.
pub fn run_bump_workflow_with<F, V>(
    args: &BumpWorkflowArgs,
    config: &Config,
    open_vcs: F,
) -> Result<WorkflowResult>
where
    F: FnOnce(&Path) -> Result<V>,
    V: Vcs,
{
    let versionizer = Versionizer::from_config(&args.cwd, config);

    let Some(release) = args.release else {
        return Ok(WorkflowResult {
            outcome: WorkflowOutcome::Current(versionizer.current_version()?),
            warnings: Vec::new(),
        });
    };

    let result = versionizer.bump(release)?;
    let mut warnings = Vec::new();

    let mode = PublishMode::resolve(args.commit, args.tag, &config.git);
    if mode != PublishMode::Skip {
        let published = open_vcs(args.cwd.as_path())
            .and_then(|vcs| publish(&vcs, &result, mode, &config.git));

        if let Err(e) = published {
            tracing::debug!(error = %e, "version control step failed");
            warnings.push(PublishWarning::GitExecutionFailed {
                label: config.git.label(&result.new_version),
                reason: e.to_string(),
            });
        }
    }

    Ok(WorkflowResult {
        outcome: WorkflowOutcome::Bumped(result),
        warnings,
    })
}
