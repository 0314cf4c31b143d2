//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tsling commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Validate catalogs (empty sources, placeholders, duplicates, etc.)
//! - `lookup`: Look up one translation the way a runtime loader would
//! - `stats`: Per-catalog translation progress
//! - `normalize`: Rewrite catalogs with merged, sorted contexts
//! - `merge`: Merge a freshly extracted template into translated catalogs
//! - `export`: Convert a catalog to JSON or PO
//! - `init`: Initialize tsling configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::core::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's arguments.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Normalize(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that scan a project.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root to scan for catalogs (defaults to the current directory)
    #[arg(long, env = "TSLING_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Source language of the catalogs (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file to look up in
    pub file: PathBuf,

    /// Context (class) name of the message
    #[arg(long)]
    pub context: String,

    /// Source text of the message
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment of the message
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for plural forms; replaces %n in the result
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Freshly extracted template catalog
    #[arg(long)]
    pub template: PathBuf,

    /// Catalogs to update (default: all scanned catalogs except the template)
    pub files: Vec<PathBuf>,

    /// Remove messages no longer in the template instead of marking them vanished
    #[arg(long)]
    pub drop_obsolete: bool,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Catalog file to export
    pub file: PathBuf,

    /// Target format
    #[arg(long, value_enum)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (empty sources, placeholders, duplicates, untranslated text)
    Check(CheckCommand),
    /// Look up a translation, falling back to the source text
    Lookup(LookupCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Merge duplicate contexts and sort contexts by name
    Normalize(NormalizeCommand),
    /// Merge a freshly extracted template into existing catalogs
    Merge(MergeCommand),
    /// Export a catalog to JSON or gettext PO
    Export(ExportCommand),
    /// Initialize a new .tslingrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
