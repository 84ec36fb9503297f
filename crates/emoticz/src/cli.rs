//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Compose, check and classify emoticon-prefixed commit messages.
#[derive(Debug, Parser)]
#[command(name = "emoticz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose a commit message interactively
    Commit(commands::commit::CommitArgs),

    /// Print the example, schema, schema pattern or commit rules
    Show(commands::show::ShowArgs),

    /// Check a commit message against the schema
    Check(commands::check::CheckArgs),

    /// Resolve the version bump for a set of commit messages
    Bump(commands::bump::BumpArgs),

    /// Parse a commit message into its parts
    Parse(commands::parse::ParseArgs),

    /// Initialize a new emoticz configuration
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Commit(args) => commands::commit::run(args),
            Commands::Show(args) => commands::show::run(args),
            Commands::Check(args) => commands::check::run(args),
            Commands::Bump(args) => commands::bump::run(args),
            Commands::Parse(args) => commands::parse::run(args),
            Commands::Init(args) => commands::init::run(args),
        }
    }
}
