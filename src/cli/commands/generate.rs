//! Generate command implementation
//!
//! Implements `stagegen generate` (and the bare `stagegen` invocation):
//! load the configuration, resolve releases, synthesize, write.

use anyhow::{Context, Result};

use super::{load_projects, GenerateArgs};
use crate::cli::output::{status, OutputConfig};
use crate::core::check::check;
use crate::core::dockerfile::{synthesize, DockerfileOptions};
use crate::error::{CheckError, StagegenError};
use crate::infra::filesystem;
use crate::infra::github::GithubResolver;

/// Execute the generate command
pub async fn execute(args: &GenerateArgs, output: &OutputConfig) -> Result<()> {
    let projects = load_projects(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    if args.strict {
        let report = check(&projects);
        if !report.is_valid() {
            return Err(StagegenError::from(CheckError {
                issues: report.issues,
            }))
            .context("Refusing to generate in strict mode");
        }
    }

    let resolver = GithubResolver::with_api_url(args.api_url.clone());
    if !resolver.is_authenticated() {
        tracing::info!("GITHUB_TOKEN not set, release lookups are unauthenticated");
    }

    let remote = projects.iter().filter(|p| !p.main).count();
    let spinner = if args.stdout {
        indicatif::ProgressBar::hidden()
    } else {
        output.spinner(&format!("Resolving {remote} release(s)..."))
    };

    let options = DockerfileOptions {
        jobs: args.jobs,
        parallel: args.parallel,
    };
    let result = synthesize(&projects, &resolver, &options).await;
    spinner.finish_and_clear();
    let document = result
        .map_err(StagegenError::from)
        .context("Failed to resolve release sources")?;

    if args.stdout {
        print!("{document}");
        return Ok(());
    }

    filesystem::write_file(&args.output, &document)
        .map_err(StagegenError::from)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    output.status(
        status::SUCCESS,
        &format!(
            "Wrote {} ({} stage(s))",
            args.output.display(),
            projects.len()
        ),
    );
    Ok(())
}
