//! Batch configuration: roots and the ordered mapping list.

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One prototype-to-destination mapping.
///
/// Paths are relative to the configured roots; `depth` is the destination's
/// nesting depth below the project root, used to derive import prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMapping {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub depth: usize,
}

impl FileMapping {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        depth: usize,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            depth,
        }
    }
}

/// Static configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub prototype_root: PathBuf,
    pub target_root: PathBuf,
    pub mappings: Vec<FileMapping>,
}

impl BatchConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot drive a batch.
    pub fn validate(&self) -> Result<()> {
        if self.mappings.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "mapping list is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The built-in sub-page mapping set.
pub fn default_mappings() -> Vec<FileMapping> {
    vec![
        FileMapping::new("superadmin/analytics/page.tsx", "admin/analytics.js", 3),
        FileMapping::new("superadmin/system/page.tsx", "admin/system.js", 3),
        FileMapping::new("superadmin/users/page.tsx", "admin/users.js", 3),
        FileMapping::new("superadmin/tickets/page.tsx", "admin/tickets.js", 3),
        FileMapping::new("support/create/page.tsx", "support/create-ticket.js", 3),
        FileMapping::new(
            "superadmin/tickets/[id]/page.tsx",
            "support/ticket/[id].js",
            4,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_set_has_six_ordered_entries() {
        let mappings = default_mappings();
        assert_eq!(mappings.len(), 6);
        assert_eq!(mappings[0].destination, PathBuf::from("admin/analytics.js"));
        assert_eq!(mappings[5].depth, 4);
    }

    #[test]
    fn config_round_trips_through_json_preserving_order() {
        let config = BatchConfig {
            prototype_root: PathBuf::from("/proto/app"),
            target_root: PathBuf::from("/site/src/pages"),
            mappings: default_mappings(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: BatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.mappings, config.mappings);
        assert_eq!(parsed.prototype_root, config.prototype_root);
    }

    #[test]
    fn empty_mapping_list_is_rejected() {
        let config = BatchConfig {
            prototype_root: PathBuf::from("a"),
            target_root: PathBuf::from("b"),
            mappings: Vec::new(),
        };
        assert!(config.validate().is_err());
    }
}
