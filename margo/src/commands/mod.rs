mod completions;
mod repository;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use repository::RepositoryCommand;

#[derive(Parser)]
#[command(name = "margo")]
#[command(version)]
#[command(about = "Scaffold Go repository code for microservices")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Repository(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a repository interface and stub for an entity
    Repository(RepositoryCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
