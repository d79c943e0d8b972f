//! Test utilities for property-based testing
//!
//! This module provides generators and a deterministic resolver.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::project::Project;
use crate::core::resolver::ArtifactResolver;
use crate::core::stage::Source;
use crate::error::ResolveError;

/// Resolver returning a URL derived from owner and name, without network access
#[derive(Debug, Default)]
pub struct StaticResolver {
    calls: AtomicUsize,
    fail_on: Option<String>,
}

impl StaticResolver {
    /// Resolver that fails for the project called `name`
    pub fn failing_on(name: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: Some(name.to_string()),
        }
    }

    /// URL this resolver returns for `project`
    pub fn url_for(project: &Project) -> String {
        format!(
            "https://example.invalid/{}/{}/tarball/latest",
            project.owner.as_deref().unwrap_or("unknown"),
            project.name
        )
    }

    /// Source a resolution pass would produce for `project`
    pub fn source_for(project: &Project) -> Source {
        if project.main {
            Source::Local
        } else {
            Source::Remote {
                url: Self::url_for(project),
            }
        }
    }

    /// Number of lookups performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArtifactResolver for StaticResolver {
    async fn resolve(&self, project: &Project) -> Result<String, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.as_deref() == Some(project.name.as_str()) {
            return Err(ResolveError::MissingTarball {
                owner: project.owner.clone().unwrap_or_default(),
                project: project.name.clone(),
            });
        }
        Ok(Self::url_for(project))
    }
}

pub mod generators {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use crate::core::project::Project;

    /// Generate a valid stage name (lowercase alphanumeric with hyphens)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,14}[a-z0-9]?".prop_filter("Name must not shadow the base stage", |s| {
            s != "base"
        })
    }

    /// Generate a CMake cache definition
    pub fn cmake_flag() -> impl Strategy<Value = String> {
        ("[A-Z][A-Z_]{0,12}", prop_oneof!["ON", "OFF", "[0-9]{1,2}"])
            .prop_map(|(key, value)| format!("-D{key}={value}"))
    }

    /// Generate a dependency-safe project list: unique names, every
    /// dependency defined earlier, at most one main project.
    pub fn project_chain() -> impl Strategy<Value = Vec<Project>> {
        proptest::collection::btree_set(project_name(), 1..8)
            .prop_flat_map(|names| {
                let names: Vec<String> = names.into_iter().collect();
                let count = names.len();
                let specs: Vec<_> = (0..count)
                    .map(|i| {
                        (
                            proptest::collection::vec(any::<Index>(), 0..=i.min(3)),
                            proptest::collection::vec(cmake_flag(), 0..4),
                            any::<bool>(),
                        )
                    })
                    .collect();
                (Just(names), specs, proptest::option::of(0..count))
            })
            .prop_map(|(names, specs, main)| {
                names
                    .iter()
                    .zip(specs)
                    .enumerate()
                    .map(|(i, (name, (deps, flags, tests)))| {
                        let mut dependencies: Vec<String> =
                            deps.iter().map(|idx| names[idx.index(i)].clone()).collect();
                        dependencies.dedup();
                        Project::new(name.clone(), "acme")
                            .with_dependencies(dependencies)
                            .with_flags(flags)
                            .with_main(main == Some(i))
                            .with_tests(tests)
                    })
                    .collect()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_project_name_generator(name in project_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_cmake_flag_generator(flag in cmake_flag()) {
            prop_assert!(flag.starts_with("-D"));
            prop_assert!(flag.contains('='));
        }

        #[test]
        fn test_project_chain_is_dependency_safe(projects in project_chain()) {
            for (i, project) in projects.iter().enumerate() {
                for dep in &project.dependencies {
                    prop_assert!(projects[..i].iter().any(|p| &p.name == dep));
                }
            }
            prop_assert!(projects.iter().filter(|p| p.main).count() <= 1);
        }
    }
}
