//! CLI for the proto-convert tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proto_convert::diff::render_preview;
use proto_convert::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protoconv")]
#[command(author, version, about = "Prototype-to-page source converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the batch conversion over a mapping list
    Run {
        /// JSON configuration file (roots plus ordered mappings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prototype root directory (with the built-in mapping list)
        #[arg(long)]
        prototype_root: Option<PathBuf>,

        /// Target root directory (with the built-in mapping list)
        #[arg(long)]
        target_root: Option<PathBuf>,

        /// Preview changes without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert a single prototype file and print the result
    Convert {
        /// Prototype file to convert
        path: PathBuf,

        /// Destination nesting depth below the project root
        #[arg(short, long, default_value_t = 0)]
        depth: usize,
    },

    /// Show the pipeline stages in application order
    Stages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            prototype_root,
            target_root,
            dry_run,
        } => cmd_run(config, prototype_root, target_root, dry_run),
        Commands::Convert { path, depth } => cmd_convert(path, depth),
        Commands::Stages => cmd_stages(),
    }
}

fn cmd_run(
    config: Option<PathBuf>,
    prototype_root: Option<PathBuf>,
    target_root: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = match (config, prototype_root, target_root) {
        (Some(path), _, _) => {
            BatchConfig::from_file(&path).with_context(|| format!("loading {}", path.display()))?
        }
        (None, Some(proto), Some(target)) => BatchConfig {
            prototype_root: proto,
            target_root: target,
            mappings: default_mappings(),
        },
        _ => anyhow::bail!("provide --config, or both --prototype-root and --target-root"),
    };

    let mut runner = BatchRunner::from_config(&config);
    if dry_run {
        runner = runner.dry_run();
    }

    let report = runner.run(&config.mappings);

    for outcome in &report.outcomes {
        match &outcome.status {
            MappingStatus::SourceMissing => {
                println!(
                    "warning: prototype not found: {}",
                    outcome.mapping.source.display()
                );
            }
            MappingStatus::Converted { backup_created } => {
                if *backup_created {
                    println!(
                        "backed up: {}{}",
                        outcome.mapping.destination.display(),
                        BACKUP_SUFFIX
                    );
                }
                println!("converted: {}", outcome.mapping.destination.display());
            }
            MappingStatus::Failed(message) => {
                println!("error: {message}");
            }
        }
    }

    if dry_run {
        for change in report.changes.iter().filter(|c| c.is_modified()) {
            println!("{}", render_preview(change));
        }
    }

    let summary = report.summary;
    println!(
        "{} converted, {} missing, {} failed ({} backed up)",
        summary.converted, summary.missing, summary.failed, summary.backups
    );

    Ok(())
}

fn cmd_convert(path: PathBuf, depth: usize) -> Result<()> {
    let output =
        convert_file(&path, depth).with_context(|| format!("converting {}", path.display()))?;
    print!("{output}");
    Ok(())
}

fn cmd_stages() -> Result<()> {
    for (idx, description) in conversion_pipeline().describe().iter().enumerate() {
        println!("{}. {}", idx + 1, description);
    }
    Ok(())
}
