//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::ffi::OsString;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Args, Command, CommandFactory, FromArgMatches, Parser};

use commands::{Commands, GenerateArgs};
use output::OutputConfig;

/// Stagegen - multi-stage Dockerfile generator
///
/// Reads a declarative list of CMake projects and writes a Dockerfile that
/// builds each one from source, chaining their install trees together.
/// Without a subcommand, runs `generate`.
#[derive(Parser, Debug)]
#[command(name = "stagegen")]
#[command(author, version, about, long_about = None)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")"))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error on failure
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, rejecting top-level generate flags combined with a subcommand.
    ///
    /// `-v` and `-q` are global and may appear on either side of the subcommand.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;

        if let Some(subcommand) = matches.subcommand_name() {
            let generate_args = GenerateArgs::augment_args(Command::new("generate"));
            let explicit = generate_args.get_arguments().find(|arg| {
                matches.value_source(arg.get_id().as_str()) == Some(ValueSource::CommandLine)
            });
            if let Some(arg) = explicit {
                let flag = arg
                    .get_long()
                    .map_or_else(|| arg.get_id().to_string(), |long| format!("--{long}"));
                return Err(command.error(
                    ErrorKind::ArgumentConflict,
                    format!("'{flag}' cannot be used before the '{subcommand}' subcommand"),
                ));
            }
        }

        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }

    /// Output settings derived from the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.verbose)
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = self.output_config();
        match self.command {
            Some(cmd) => cmd.run(&output).await,
            None => commands::generate::execute(&self.generate, &output).await,
        }
    }
}
