//! Build stage synthesis
//!
//! Turns one [`Project`] into the lines of its Dockerfile stage: source
//! acquisition, dependency imports, and a single chained CMake command.
//! Every step of the command is joined with `&&`, so the first failing
//! step aborts the stage.

use crate::config::defaults;
use crate::core::project::Project;

/// Where a stage gets its sources from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local build context (the main project)
    Local,
    /// Release tarball at the given URL
    Remote { url: String },
}

impl Source {
    /// Argument of the `ADD` instruction
    fn add_argument(&self) -> String {
        match self {
            Self::Local => ". .".to_string(),
            Self::Remote { url } => format!("{url} {}", defaults::SOURCE_ARCHIVE),
        }
    }

    /// First command of the `RUN` chain
    fn unpack_command(&self) -> String {
        match self {
            Self::Local => "echo".to_string(),
            Self::Remote { .. } => {
                format!("tar xf {} --strip-components=1", defaults::SOURCE_ARCHIVE)
            }
        }
    }
}

/// Indentation of CMake options inside the `RUN` chain
const OPTION_INDENT: &str = "        ";

/// Synthesize the lines of the build stage for `project`.
///
/// Dependencies are referenced by stage label only; whether they were
/// defined earlier is the caller's concern.
pub fn stage_lines(project: &Project, source: &Source) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("FROM {} AS {}", defaults::BASE_STAGE, project.name),
        format!("ADD {}", source.add_argument()),
        String::new(),
    ];

    lines.extend(project.dependencies.iter().map(|dep| {
        format!(
            "COPY --from={dep} {prefix} {prefix}",
            prefix = defaults::INSTALL_PREFIX
        )
    }));

    lines.push(String::new());
    lines.push(format!("RUN {} \\", source.unpack_command()));
    lines.push(" && ldconfig \\".to_string());
    lines.push(" && cmake -B build \\".to_string());

    let options = defaults::LEADING_CMAKE_OPTIONS
        .iter()
        .copied()
        .chain(project.flags.iter().map(String::as_str))
        .chain(defaults::TRAILING_CMAKE_OPTIONS.iter().copied());
    lines.extend(options.map(|option| format!("{OPTION_INDENT}{option} \\")));

    lines.push(" && cmake --build build -j $JOBS \\".to_string());
    if project.tests {
        lines.push(" && cmake --build build -t test \\".to_string());
    }
    lines.push(" && cmake --build build -t install \\".to_string());
    lines.push(" && rm -rf ./*".to_string());

    lines
}
