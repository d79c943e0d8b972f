//! Core business logic module
//!
//! This module contains the generation logic for stagegen.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`project`] - Project records and their configuration entries
//! - [`config`] - Configuration document parsing
//! - [`resolver`] - Artifact resolution seam
//! - [`stage`] - Build stage synthesis
//! - [`dockerfile`] - Document synthesis
//! - [`graph`] - Stage dependency graph
//! - [`check`] - Configuration validation

pub mod check;
pub mod config;
pub mod dockerfile;
pub mod graph;
pub mod project;
pub mod resolver;
pub mod stage;
