//! Dockerfile document synthesis
//!
//! A document is a fixed preamble defining the `base` stage, followed by one
//! stage per project in configuration order. Projects are never reordered:
//! the configuration order is trusted to be dependency-safe.

use crate::config::defaults;
use crate::core::project::Project;
use crate::core::resolver::{resolve_sources, ArtifactResolver};
use crate::core::stage::{stage_lines, Source};
use crate::error::ResolveError;

/// Options for document synthesis
#[derive(Debug, Clone)]
pub struct DockerfileOptions {
    /// Parallel build jobs written into the `ENV` block
    pub jobs: usize,
    /// Release lookups in flight at once
    pub parallel: usize,
}

impl Default for DockerfileOptions {
    fn default() -> Self {
        Self {
            jobs: defaults::DEFAULT_BUILD_JOBS,
            parallel: defaults::DEFAULT_PARALLEL_RESOLVES,
        }
    }
}

/// Lines of the base stage shared by every project stage
pub fn preamble_lines(jobs: usize) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("FROM {} AS {}", defaults::BASE_IMAGE, defaults::BASE_STAGE),
        String::new(),
        "WORKDIR /src".to_string(),
        String::new(),
        r#"SHELL ["/bin/bash", "-eux", "-c"]"#.to_string(),
        String::new(),
        r"RUN --mount=type=cache,sharing=locked,target=/var/cache/apt \".to_string(),
        r"    --mount=type=cache,sharing=locked,target=/var/lib/apt \".to_string(),
        r"    apt update \".to_string(),
        r"    && DEBIAN_FRONTEND=noninteractive apt install -qqy --no-install-recommends \"
            .to_string(),
    ];

    let last = defaults::BASE_PACKAGES.len().saturating_sub(1);
    lines.extend(
        defaults::BASE_PACKAGES
            .iter()
            .enumerate()
            .map(|(i, package)| {
                if i == last {
                    format!("    {package}")
                } else {
                    format!("    {package} \\")
                }
            }),
    );

    lines.extend([
        String::new(),
        format!("ENV JOBS={jobs} \\"),
        r"    CMAKE_BUILD_TYPE=Release \".to_string(),
        format!("    CTEST_PARALLEL_LEVEL={jobs} \\"),
        "    CTEST_OUTPUT_ON_FAILURE=ON".to_string(),
        String::new(),
    ]);
    lines
}

/// Render a document from projects and their already resolved sources.
///
/// `sources` must be index-aligned with `projects`.
pub fn render(projects: &[Project], sources: &[Source], jobs: usize) -> String {
    debug_assert_eq!(projects.len(), sources.len());

    let stages = projects
        .iter()
        .zip(sources)
        .flat_map(|(project, source)| stage_lines(project, source));

    let mut document = String::new();
    for line in preamble_lines(jobs).into_iter().chain(stages) {
        document.push_str(&line);
        document.push('\n');
    }
    document
}

/// Resolve every remote source and render the full document.
pub async fn synthesize<R>(
    projects: &[Project],
    resolver: &R,
    options: &DockerfileOptions,
) -> Result<String, ResolveError>
where
    R: ArtifactResolver + Sync,
{
    let sources = resolve_sources(projects, resolver, options.parallel).await?;
    tracing::info!("Synthesizing {} stage(s)", projects.len());
    Ok(render(projects, &sources, options.jobs))
}
