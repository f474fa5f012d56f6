//! The fixed conversion stages, in pipeline order.

pub mod components;
pub mod entities;
pub mod imports;
pub mod runtime;
pub mod styles;
pub mod types;

pub use components::{ComponentRenameEngine, UiComponent, UI_COMPONENTS};
pub use entities::EntityEscaper;
pub use imports::ImportRewriter;
pub use runtime::RuntimeApiAdapter;
pub use styles::{StyleTokenMapper, STYLE_TOKENS};
pub use types::TypeAnnotationStripper;

use crate::context::ConversionContext;
use crate::error::{ConvertError, Result};
use crate::transform::Pipeline;
use std::fs;
use std::path::Path;

/// Builds the full prototype-to-target pipeline.
///
/// Stage order is part of the contract: imports are rewritten before tags
/// are renamed, and annotations are stripped before design tokens and
/// runtime accessors are touched.
pub fn conversion_pipeline() -> Pipeline {
    Pipeline::new()
        .stage(ImportRewriter::new())
        .stage(ComponentRenameEngine::new())
        .stage(TypeAnnotationStripper::new())
        .stage(StyleTokenMapper::new())
        .stage(RuntimeApiAdapter::new())
        .stage(EntityEscaper::new())
}

/// Converts one prototype document at the given destination depth.
pub fn convert(source: &str, depth: usize) -> Result<String> {
    conversion_pipeline().apply(source, &ConversionContext::new(depth))
}

/// Converts a prototype file on disk without writing anything.
pub fn convert_file(path: &Path, depth: usize) -> Result<String> {
    if !path.exists() {
        return Err(ConvertError::SourceMissing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    convert(&text, depth)
}
