//! # proto-convert
//!
//! A deterministic, rule-based source-to-source converter that rewrites
//! typed component-template prototype pages into untyped pages for the
//! target runtime.
//!
//! The conversion is an ordered pipeline of flat-text rewrites:
//! - import specifiers move from the `@/` build alias to relative paths
//!   derived from the destination's nesting depth,
//! - a fixed vocabulary of UI components is renamed to Green variants,
//! - static-typing constructs are stripped,
//! - semantic design tokens become literal utility classes,
//! - the search-params accessor idiom becomes `router.query` paths,
//! - apostrophe contractions are entity-escaped.
//!
//! There is no syntax-tree parsing and no output validation; interface
//! bodies with nested braces are a known limitation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use proto_convert::prelude::*;
//!
//! let runner = BatchRunner::new("/proto/app", "/site/src/pages");
//! let report = runner.run(&default_mappings());
//!
//! for outcome in &report.outcomes {
//!     println!("{}: {:?}", outcome.destination.display(), outcome.status);
//! }
//! ```
//!
//! Single documents can be converted directly:
//!
//! ```rust
//! use proto_convert::stages::convert;
//!
//! let js = convert("import Card from '@/components/ui/Card';", 2).unwrap();
//! assert_eq!(js, "import CardGreen from '../../components/ui/CardGreen';");
//! ```

pub mod batch;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod stages;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::batch::{
        backup_path, BatchReport, BatchRunner, BatchSummary, FileChange, MappingOutcome,
        MappingStatus, BACKUP_SUFFIX,
    };
    pub use crate::config::{default_mappings, BatchConfig, FileMapping};
    pub use crate::context::ConversionContext;
    pub use crate::error::{ConvertError, Result};
    pub use crate::stages::{
        conversion_pipeline, convert, convert_file, ComponentRenameEngine, EntityEscaper,
        ImportRewriter, RuntimeApiAdapter, StyleTokenMapper, TypeAnnotationStripper,
    };
    pub use crate::transform::{Pipeline, TextTransform, Transform};
}

pub use prelude::*;
