//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// graphdev - Developer tooling for LangGraph workflow projects.
#[derive(Debug, Parser)]
#[command(name = "graphdev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check Python and LangGraph runtime requirements
    Check(CheckArgs),

    /// Create a minimal LangGraph project scaffold
    Scaffold(ScaffoldArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Minimum Python version
    #[arg(long, default_value = "3.10", value_name = "X.Y")]
    pub min_version: String,

    /// Optional output path for the JSON report
    #[arg(long, value_name = "PATH")]
    pub write_json: Option<PathBuf>,

    /// Python interpreter to inspect (default: first of python3, python on PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            min_version: "3.10".to_string(),
            write_json: None,
            python: None,
        }
    }
}

/// Arguments for the `scaffold` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScaffoldArgs {
    /// Output directory for the scaffold project
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Python package name under src/
    #[arg(long, default_value = "agent_app")]
    pub package: String,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
