//! Configuration validation logic
//!
//! Generation trusts the configuration order. This module detects the cases
//! where that trust is misplaced: duplicate or invalid stage labels,
//! dependencies that are unknown or defined later, several main projects,
//! and cycles. All issues are collected instead of failing on the first.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::config::defaults;
use crate::core::graph::DependencyGraph;
use crate::core::project::Project;

/// A problem found in the configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// Two projects share a stage label
    #[error("Duplicate project name '{name}'")]
    DuplicateName { name: String },

    /// Name is not usable as a build stage label
    #[error("Project name '{name}' is not a valid build stage name")]
    InvalidStageName { name: String },

    /// Dependency does not name any project
    #[error("Unknown dependency '{dependency}' required by '{project}'")]
    UnknownDependency { project: String, dependency: String },

    /// Dependency is defined at or after the dependent project
    #[error("'{project}' depends on '{dependency}', which is not defined before it")]
    ForwardReference { project: String, dependency: String },

    /// More than one project is built from the local context
    #[error("Multiple main projects: {}", .names.join(", "))]
    MultipleMain { names: Vec<String> },

    /// Dependency cycle
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },
}

/// Result of checking a configuration
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Number of projects checked
    pub project_count: usize,
    /// Every issue found, in configuration order
    pub issues: Vec<Issue>,
    /// A dependency-safe stage order, when one exists
    pub build_order: Option<Vec<String>>,
}

impl CheckReport {
    /// Whether the configuration can be generated as-is
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether the suggested order differs from the configuration order
    pub fn needs_reordering(&self, projects: &[Project]) -> bool {
        self.build_order.as_ref().is_some_and(|order| {
            !order
                .iter()
                .map(String::as_str)
                .eq(projects.iter().map(|p| p.name.as_str()))
        })
    }
}

/// Lowercased label accepted as a build stage name
fn stage_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9._-]*$").expect("valid stage name regex"))
}

/// Check projects for ordering and naming problems
pub fn check(projects: &[Project]) -> CheckReport {
    let all_names: HashSet<&str> = projects.iter().map(|p| p.name.as_str()).collect();

    let mut issues = Vec::new();
    let mut defined: HashSet<&str> = HashSet::new();

    for project in projects {
        let name = project.name.as_str();

        if !defined.insert(name) {
            issues.push(Issue::DuplicateName {
                name: name.to_string(),
            });
        }

        let lowered = name.to_lowercase();
        if !stage_name_pattern().is_match(&lowered) || lowered == defaults::BASE_STAGE {
            issues.push(Issue::InvalidStageName {
                name: name.to_string(),
            });
        }

        for dependency in &project.dependencies {
            if !all_names.contains(dependency.as_str()) {
                issues.push(Issue::UnknownDependency {
                    project: name.to_string(),
                    dependency: dependency.clone(),
                });
            } else if dependency == name || !defined_before(projects, name, dependency) {
                issues.push(Issue::ForwardReference {
                    project: name.to_string(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    let mains: Vec<String> = projects
        .iter()
        .filter(|p| p.main)
        .map(|p| p.name.clone())
        .collect();
    if mains.len() > 1 {
        issues.push(Issue::MultipleMain { names: mains });
    }

    let build_order = match DependencyGraph::from_projects(projects).topological_sort() {
        Ok(order) => Some(order),
        Err(cycle) => {
            issues.push(Issue::CircularDependency { cycle });
            None
        }
    };

    for issue in &issues {
        tracing::debug!("Check issue: {issue}");
    }

    CheckReport {
        project_count: projects.len(),
        issues,
        build_order,
    }
}

/// Whether `dependency` is first defined before the first `project` entry
fn defined_before(projects: &[Project], project: &str, dependency: &str) -> bool {
    let position = |name: &str| projects.iter().position(|p| p.name == name);
    match (position(dependency), position(project)) {
        (Some(dep), Some(own)) => dep < own,
        _ => false,
    }
}
