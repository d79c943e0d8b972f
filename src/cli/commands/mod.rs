//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod generate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::{Args, Subcommand};

use crate::cli::output::OutputConfig;
use crate::config::{defaults, urls};
use crate::core::config::parse_projects;
use crate::core::project::Project;
use crate::error::StagegenError;
use crate::infra::filesystem;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the Dockerfile (default)
    Generate(GenerateArgs),

    /// Validate dependency order without generating
    Check(CheckArgs),
}

/// Arguments of `stagegen generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Project configuration file, relative to the working directory
    /// (CI jobs usually pass .github/workflows/docker.toml)
    #[arg(short, long, default_value = defaults::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Dockerfile to write
    #[arg(short, long, default_value = defaults::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Parallel build jobs baked into the Dockerfile
    #[arg(
        short,
        long,
        default_value_t = defaults::DEFAULT_BUILD_JOBS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub jobs: usize,

    /// Number of release lookups in flight at once
    #[arg(
        short,
        long,
        default_value_t = defaults::DEFAULT_PARALLEL_RESOLVES,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub parallel: usize,

    /// Release API base URL
    #[arg(long, env = urls::GITHUB_API_ENV, default_value = urls::GITHUB_API)]
    pub api_url: String,

    /// Refuse to generate when the configuration check finds issues
    #[arg(long)]
    pub strict: bool,

    /// Print the Dockerfile to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments of `stagegen check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Project configuration file, relative to the working directory
    /// (CI jobs usually pass .github/workflows/docker.toml)
    #[arg(short, long, default_value = defaults::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Generate(args) => generate::execute(&args, output).await,
            Self::Check(args) => check::execute(&args, output),
        }
    }
}

/// Read and parse the configuration file
pub fn load_projects(path: &Path) -> Result<Vec<Project>, StagegenError> {
    let content = filesystem::read_file(path)?;
    let projects = parse_projects(&content)?;
    tracing::info!("Loaded {} project(s) from {}", projects.len(), path.display());
    Ok(projects)
}
