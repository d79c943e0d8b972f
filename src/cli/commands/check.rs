//! Check command implementation
//!
//! Implements `stagegen check` to validate stage ordering without generating.

use anyhow::{bail, Context, Result};

use super::{load_projects, CheckArgs};
use crate::cli::output::{status, OutputConfig};
use crate::core::check::check;

/// Execute the check command
pub fn execute(args: &CheckArgs, output: &OutputConfig) -> Result<()> {
    let projects = load_projects(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    let report = check(&projects);

    output.status(
        status::INFO,
        &format!("Checked {} project(s)", report.project_count),
    );

    if report.needs_reordering(&projects) {
        if let Some(order) = &report.build_order {
            output.status(
                status::WARNING,
                &format!("Dependency-safe order: {}", order.join(", ")),
            );
        }
    }

    if report.is_valid() {
        output.status(status::SUCCESS, "Configuration is valid");
        return Ok(());
    }

    for issue in &report.issues {
        eprintln!("  {} {issue}", status::ERROR);
    }
    bail!(
        "Check failed with {} issue(s) in {}",
        report.issues.len(),
        args.config.display()
    );
}
