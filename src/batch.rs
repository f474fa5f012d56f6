//! Batch execution over an ordered list of file mappings.

use crate::config::{BatchConfig, FileMapping};
use crate::context::ConversionContext;
use crate::error::{ConvertError, Result};
use crate::stages::conversion_pipeline;
use crate::transform::Pipeline;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to a destination path for its pre-conversion backup.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Status of one mapping after batch execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingStatus {
    /// Converted and written (or previewed, in dry-run mode).
    Converted { backup_created: bool },
    /// Prototype file absent; skipped.
    SourceMissing,
    /// Read, transform, or write fault; skipped without aborting the batch.
    Failed(String),
}

/// Result for a single mapping.
#[derive(Debug)]
pub struct MappingOutcome {
    pub mapping: FileMapping,
    pub destination: PathBuf,
    pub status: MappingStatus,
}

/// A destination change captured for dry-run previews.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub transformed: String,
}

impl FileChange {
    /// Returns true if the destination content would change.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }
}

/// Summary of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub missing: usize,
    pub failed: usize,
    pub backups: usize,
}

/// Result of executing a batch.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<MappingOutcome>,
    pub changes: Vec<FileChange>,
    pub summary: BatchSummary,
}

/// Runs the conversion pipeline over an ordered mapping list.
///
/// Mappings are processed strictly in input order, one at a time. A fault in
/// one mapping is recorded and never aborts the rest; already-written
/// destinations are not rolled back.
pub struct BatchRunner {
    prototype_root: PathBuf,
    target_root: PathBuf,
    pipeline: Pipeline,
    dry_run: bool,
}

impl BatchRunner {
    /// Creates a runner for the given source and destination roots.
    pub fn new(prototype_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            prototype_root: prototype_root.into(),
            target_root: target_root.into(),
            pipeline: conversion_pipeline(),
            dry_run: false,
        }
    }

    /// Creates a runner from a batch configuration.
    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(&config.prototype_root, &config.target_root)
    }

    /// Enables dry-run mode: outcomes and previews are computed but the
    /// filesystem is left untouched.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Processes every mapping in order and reports per-mapping outcomes.
    pub fn run(&self, mappings: &[FileMapping]) -> BatchReport {
        let mut outcomes = Vec::with_capacity(mappings.len());
        let mut changes = Vec::new();
        let mut summary = BatchSummary {
            total: mappings.len(),
            ..BatchSummary::default()
        };

        for mapping in mappings {
            let outcome = self.process_mapping(mapping, &mut changes);
            match &outcome.status {
                MappingStatus::Converted { backup_created } => {
                    summary.converted += 1;
                    if *backup_created {
                        summary.backups += 1;
                    }
                }
                MappingStatus::SourceMissing => summary.missing += 1,
                MappingStatus::Failed(_) => summary.failed += 1,
            }
            outcomes.push(outcome);
        }

        BatchReport {
            outcomes,
            changes,
            summary,
        }
    }

    fn process_mapping(
        &self,
        mapping: &FileMapping,
        changes: &mut Vec<FileChange>,
    ) -> MappingOutcome {
        let source = self.prototype_root.join(&mapping.source);
        let destination = self.target_root.join(&mapping.destination);

        // Faults are confined to this mapping; the batch carries on.
        let status = match self.convert_one(&source, &destination, mapping.depth, changes) {
            Ok(status) => status,
            Err(ConvertError::SourceMissing(_)) => MappingStatus::SourceMissing,
            Err(e) => MappingStatus::Failed(e.to_string()),
        };

        MappingOutcome {
            mapping: mapping.clone(),
            destination,
            status,
        }
    }

    fn convert_one(
        &self,
        source: &Path,
        destination: &Path,
        depth: usize,
        changes: &mut Vec<FileChange>,
    ) -> Result<MappingStatus> {
        if !source.exists() {
            return Err(ConvertError::SourceMissing(source.to_path_buf()));
        }

        let text = fs::read_to_string(source).map_err(|e| ConvertError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        let ctx = ConversionContext::new(depth);
        let transformed = self.pipeline.apply(&text, &ctx)?;

        let prior = if destination.exists() {
            Some(
                fs::read_to_string(destination).map_err(|e| ConvertError::Read {
                    path: destination.to_path_buf(),
                    source: e,
                })?,
            )
        } else {
            None
        };

        changes.push(FileChange {
            path: destination.to_path_buf(),
            original: prior.clone().unwrap_or_default(),
            transformed: transformed.clone(),
        });

        if self.dry_run {
            return Ok(MappingStatus::Converted {
                backup_created: prior.is_some(),
            });
        }

        // Back up a pre-existing destination before overwriting it. At most
        // one backup is retained; re-running overwrites the previous one.
        if let Some(content) = &prior {
            let backup = backup_path(destination);
            fs::write(&backup, content).map_err(|e| ConvertError::Write {
                path: backup,
                source: e,
            })?;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(destination, &transformed).map_err(|e| ConvertError::Write {
            path: destination.to_path_buf(),
            source: e,
        })?;

        Ok(MappingStatus::Converted {
            backup_created: prior.is_some(),
        })
    }
}

/// Returns the sibling backup path for a destination.
pub fn backup_path(destination: &Path) -> PathBuf {
    let mut os = destination.as_os_str().to_os_string();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_path_appends_fixed_suffix() {
        assert_eq!(
            backup_path(Path::new("/tmp/pages/admin/users.js")),
            PathBuf::from("/tmp/pages/admin/users.js.backup")
        );
    }
}
