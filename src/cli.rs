use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "star-testgen")]
#[command(about = "Appends generated star test modules to puzzle solution files", long_about = None)]
pub struct Args {
    /// Fixture root containing <year>/<day> directories
    #[arg(long, value_name = "PATH", default_value = "tests/data")]
    pub data_dir: PathBuf,

    /// Solution tree root containing yr<year>/day<N>.rs files
    #[arg(long, value_name = "PATH", default_value = "src")]
    pub source_dir: PathBuf,

    /// Print generated blocks to stdout instead of appending them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_dir(&self.data_dir)?;
        validate_dir(&self.source_dir)?;
        Ok(())
    }
}

fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}
