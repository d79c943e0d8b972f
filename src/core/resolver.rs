//! Artifact resolution
//!
//! Remote projects are built from the tarball of their latest release. The
//! lookup itself lives behind [`ArtifactResolver`] so synthesis can be driven
//! by the GitHub client in [`crate::infra::github`] or by a fixed table in
//! tests.

use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::core::project::Project;
use crate::core::stage::Source;
use crate::error::ResolveError;

/// Produces the download location of a project's source archive
pub trait ArtifactResolver {
    /// Resolve the tarball URL of the latest release of `project`
    fn resolve(&self, project: &Project) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

/// Resolve the source of every project, keeping input order.
///
/// The main project is always [`Source::Local`] and never reaches the
/// resolver. At most `parallel` lookups are in flight; the first failure
/// aborts the whole batch.
pub async fn resolve_sources<R>(
    projects: &[Project],
    resolver: &R,
    parallel: usize,
) -> Result<Vec<Source>, ResolveError>
where
    R: ArtifactResolver + Sync,
{
    stream::iter(projects)
        .map(|project| async move {
            if project.main {
                tracing::debug!("{} is the main project, using local context", project.name);
                Ok(Source::Local)
            } else {
                let url = resolver.resolve(project).await?;
                tracing::debug!("Resolved {} to {url}", project.name);
                Ok::<_, ResolveError>(Source::Remote { url })
            }
        })
        .buffered(parallel.max(1))
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StaticResolver;

    #[tokio::test]
    async fn test_main_project_is_local() {
        let resolver = StaticResolver::default();
        let projects = vec![Project::new("app", "acme").with_main(true)];

        let sources = resolve_sources(&projects, &resolver, 4).await.unwrap();

        assert_eq!(sources, vec![Source::Local]);
        assert_eq!(resolver.calls(), 0);
    }

    #[tokio::test]
    async fn test_sources_keep_input_order() {
        let resolver = StaticResolver::default();
        let projects: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| Project::new(*name, "acme"))
            .collect();

        let sources = resolve_sources(&projects, &resolver, 3).await.unwrap();

        let expected: Vec<_> = projects
            .iter()
            .map(|p| Source::Remote {
                url: StaticResolver::url_for(p),
            })
            .collect();
        assert_eq!(sources, expected);
        assert_eq!(resolver.calls(), 5);
    }

    #[tokio::test]
    async fn test_zero_parallelism_still_resolves() {
        let resolver = StaticResolver::default();
        let projects = vec![Project::new("a", "acme")];
        let sources = resolve_sources(&projects, &resolver, 0).await.unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_aborts() {
        let resolver = StaticResolver::failing_on("b");
        let projects = vec![Project::new("a", "acme"), Project::new("b", "acme")];

        let err = resolve_sources(&projects, &resolver, 1).await.unwrap_err();
        assert!(matches!(err, ResolveError::MissingTarball { .. }));
    }
}
