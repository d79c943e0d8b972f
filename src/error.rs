//! Error types for stagegen
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::check::Issue;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Document is not valid TOML
    #[error("Failed to parse configuration: {source}")]
    Parse { source: toml::de::Error },

    /// A project entry has the wrong shape
    #[error("Invalid entry for project '{project}': {error}")]
    InvalidProject { project: String, error: String },
}

/// Release resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Remote project declared without an owner
    #[error("Project '{project}' has no owner to resolve its release from")]
    MissingOwner { project: String },

    /// Request could not be sent or the body could not be read
    #[error("Network error fetching '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Non-success status code
    #[error("Release lookup for '{project}' failed with HTTP {status}: {url}")]
    HttpStatus {
        project: String,
        url: String,
        status: u16,
    },

    /// Response body was not the expected JSON
    #[error("Malformed release response from '{url}': {error}")]
    MalformedResponse { url: String, error: String },

    /// Release JSON has no tarball location
    #[error("Latest release of '{owner}/{project}' has no tarball_url")]
    MissingTarball { owner: String, project: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Strict configuration check failure
#[derive(Error, Debug)]
#[error("Configuration check found {} issue(s): {}", .issues.len(), render_issues(.issues))]
pub struct CheckError {
    pub issues: Vec<Issue>,
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level stagegen error type
#[derive(Error, Debug)]
pub enum StagegenError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resolution error
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Check error
    #[error(transparent)]
    Check(#[from] CheckError),
}
