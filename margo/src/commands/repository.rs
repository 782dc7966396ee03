use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use margo_codegen_go::{EntityName, Repository};
use margo_core::{GeneratedFile, WriteResult};

#[derive(Args)]
pub struct RepositoryCommand {
    /// Entity name (e.g. User or user_account)
    pub name: String,

    /// Directory of the entity inside the module (e.g. src/entities)
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Go module path generated import paths are rooted at
    #[arg(short, long)]
    pub module: String,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RepositoryCommand {
    /// Run the repository command
    pub fn run(&self) -> Result<()> {
        let entity = EntityName::new(&self.name, &self.path, &self.module);
        let repository = Repository::new(entity, &self.module);

        if self.dry_run {
            println!("── {} ──", repository.file_path());
            println!("{}", repository.render());
            return Ok(());
        }

        let result = repository
            .write(&self.output)
            .wrap_err("Failed to write repository stub")?;

        match result {
            WriteResult::Written => println!("Generated: {}", repository.file_path()),
            WriteResult::Skipped => {
                println!("Skipped (already exists): {}", repository.file_path())
            }
        }

        Ok(())
    }
}
