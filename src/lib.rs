//! Stagegen - multi-stage Dockerfile generator
//!
//! This library turns a declarative list of CMake projects into a Dockerfile
//! with one build stage per project, each importing the install trees of the
//! stages it depends on.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (network, filesystem)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
