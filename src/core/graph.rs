//! Stage dependency graph
//!
//! Computes a dependency-safe stage order and detects cycles. Generation
//! never reorders stages; the order computed here is only suggested to the
//! user by `stagegen check`.

use std::collections::{HashMap, HashSet};

use crate::core::project::Project;

/// Dependency graph between stages
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Adjacency list: stage -> dependencies
    edges: HashMap<String, Vec<String>>,
    /// Stages in insertion order, so sorting is deterministic
    nodes: Vec<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from projects, ignoring dependencies on unknown stages
    pub fn from_projects(projects: &[Project]) -> Self {
        let known: HashSet<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        let mut graph = Self::new();
        for project in projects {
            let deps = project
                .dependencies
                .iter()
                .filter(|d| known.contains(d.as_str()))
                .cloned()
                .collect();
            graph.add_stage(&project.name, deps);
        }
        graph
    }

    /// Add a stage to the graph
    pub fn add_stage(&mut self, name: &str, dependencies: Vec<String>) {
        if !self.edges.contains_key(name) {
            self.nodes.push(name.to_string());
        }
        self.edges.insert(name.to_string(), dependencies);
    }

    /// Compute topological sort (build order)
    ///
    /// Returns stages in order such that dependencies come before dependents,
    /// or the first cycle found.
    pub fn topological_sort(&self) -> Result<Vec<String>, Vec<String>> {
        let mut visited = HashSet::new();
        let mut temp_visited = HashSet::new();
        let mut result = Vec::new();
        let mut path = Vec::new();

        for node in &self.nodes {
            if !visited.contains(node) {
                self.visit(node, &mut visited, &mut temp_visited, &mut result, &mut path)?;
            }
        }

        Ok(result)
    }

    fn visit(
        &self,
        node: &str,
        visited: &mut HashSet<String>,
        temp_visited: &mut HashSet<String>,
        result: &mut Vec<String>,
        path: &mut Vec<String>,
    ) -> Result<(), Vec<String>> {
        if temp_visited.contains(node) {
            let start = path.iter().position(|n| n == node).unwrap_or(0);
            let mut cycle = path[start..].to_vec();
            cycle.push(node.to_string());
            return Err(cycle);
        }

        if visited.contains(node) {
            return Ok(());
        }

        temp_visited.insert(node.to_string());
        path.push(node.to_string());

        if let Some(deps) = self.edges.get(node) {
            for dep in deps {
                self.visit(dep, visited, temp_visited, result, path)?;
            }
        }

        path.pop();
        temp_visited.remove(node);
        visited.insert(node.to_string());
        result.push(node.to_string());

        Ok(())
    }
}
