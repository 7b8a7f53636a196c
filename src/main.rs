use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use star_testgen::error::IoError;
use star_testgen::{cli, codegen, discovery, logging, writer};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let days = discovery::walk_data_dirs(&args.data_dir)
        .with_context(|| format!("Failed to scan fixture tree {}", args.data_dir.display()))?;

    for day in &days {
        println!("{}", day.path.display());

        let target = day.solution_file(&args.source_dir)?;
        if !target.exists() {
            return Err(IoError::file_not_found(&target))
                .with_context(|| format!("No solution file for {}", day.path.display()));
        }

        let block = codegen::generate_day(&day.path)
            .with_context(|| format!("Failed to generate tests for {}", day.path.display()))?;

        if args.dry_run {
            print!("{block}");
            continue;
        }

        if let Ok(existing) = std::fs::read_to_string(&target) {
            if existing.contains("#[cfg(test)]") {
                tracing::warn!(
                    target_file = %target.display(),
                    "solution file already contains a test module; appending another"
                );
            }
        }

        writer::append_block(&target, &block)
            .with_context(|| format!("Failed to append to {}", target.display()))?;
        tracing::debug!(target_file = %target.display(), bytes = block.len(), "appended test module");
    }

    tracing::debug!(days = days.len(), "fixture processing complete");
    Ok(())
}
