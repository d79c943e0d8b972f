//! Project records
//!
//! A [`Project`] describes one build stage: either a third-party dependency
//! fetched from its latest release, or the main project built from the local
//! build context.

use serde::Deserialize;

/// One buildable unit and its declared build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique identifier, also used as the stage label
    pub name: String,
    /// Source-repository owner (only used for remote projects)
    pub owner: Option<String>,
    /// Projects whose install tree is copied into this stage, in order
    pub dependencies: Vec<String>,
    /// Literal CMake arguments, in order
    pub flags: Vec<String>,
    /// Whether this project is built from the local context
    pub main: bool,
    /// Whether the stage runs the test target
    pub tests: bool,
}

/// The body of one project table in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub flags: Vec<String>,

    #[serde(default)]
    pub main: bool,

    #[serde(default = "default_tests")]
    pub tests: bool,
}

fn default_tests() -> bool {
    true
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self {
            owner: None,
            dependencies: Vec::new(),
            flags: Vec::new(),
            main: false,
            tests: default_tests(),
        }
    }
}

impl Project {
    /// Create a remote project with default options
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::from_entry(
            name,
            ProjectEntry {
                owner: Some(owner.into()),
                ..ProjectEntry::default()
            },
        )
    }

    /// Build a project from its configuration key and table
    pub fn from_entry(name: impl Into<String>, entry: ProjectEntry) -> Self {
        Self {
            name: name.into(),
            owner: entry.owner,
            dependencies: entry.dependencies,
            flags: entry.flags,
            main: entry.main,
            tests: entry.tests,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_main(mut self, main: bool) -> Self {
        self.main = main;
        self
    }

    pub fn with_tests(mut self, tests: bool) -> Self {
        self.tests = tests;
        self
    }
}
