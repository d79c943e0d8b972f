//! Configuration document parsing
//!
//! The configuration is a TOML document where every top-level key names a
//! project and its value is a table of build options. Key order is the build
//! order, so the document is parsed into an insertion-ordered table.

use serde::Deserialize;

use crate::core::project::{Project, ProjectEntry};
use crate::error::ConfigError;

/// Parse a configuration document into projects, in file order.
pub fn parse_projects(content: &str) -> Result<Vec<Project>, ConfigError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;

    table
        .into_iter()
        .map(|(name, value)| {
            let entry = ProjectEntry::deserialize(value).map_err(|e| {
                ConfigError::InvalidProject {
                    project: name.clone(),
                    error: e.to_string(),
                }
            })?;
            Ok(Project::from_entry(name, entry))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[eigenpy]
owner = "stack-of-tasks"
flags = ["-DBUILD_TESTING_SCIPY=ON"]

[hpp-fcl]
owner = "humanoid-path-planner"
dependencies = ["eigenpy"]
tests = false

[pinocchio]
owner = "stack-of-tasks"
dependencies = ["eigenpy", "hpp-fcl"]
main = true
"#;

    #[test]
    fn test_parse_preserves_file_order() {
        let projects = parse_projects(SAMPLE).unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["eigenpy", "hpp-fcl", "pinocchio"]);
    }

    #[test]
    fn test_parse_order_is_not_alphabetical() {
        let projects = parse_projects("[zeta]\nowner = \"a\"\n[alpha]\nowner = \"b\"\n").unwrap();
        assert_eq!(projects[0].name, "zeta");
        assert_eq!(projects[1].name, "alpha");
    }

    #[test]
    fn test_parse_fields() {
        let projects = parse_projects(SAMPLE).unwrap();
        assert_eq!(projects[0].flags, vec!["-DBUILD_TESTING_SCIPY=ON"]);
        assert!(projects[0].tests);
        assert!(!projects[1].tests);
        assert_eq!(projects[1].dependencies, vec!["eigenpy"]);
        assert!(projects[2].main);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_projects("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_projects("[broken").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let err = parse_projects("[libfoo]\ntests = \"yes\"\n").unwrap_err();
        match err {
            ConfigError::InvalidProject { project, .. } => assert_eq!(project, "libfoo"),
            e => panic!("Expected InvalidProject error, got: {e:?}"),
        }
    }

    #[test]
    fn test_parse_non_table_value() {
        let err = parse_projects("libfoo = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProject { .. }));
    }
}
