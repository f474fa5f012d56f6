//! Adaptation of the search-params state accessor to the router-query idiom.

use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::{TextTransform, Transform};

/// Rewrites `useSearchParams()` state access to `router.query` property paths.
///
/// The captured key is used verbatim as a property-path segment; no check
/// that it forms a valid property name.
pub struct RuntimeApiAdapter {
    declaration: TextTransform,
    accessor: TextTransform,
}

impl RuntimeApiAdapter {
    pub fn new() -> Self {
        Self {
            declaration: TextTransform::replace_literal(
                "const searchParams = useSearchParams();",
                "const router = useRouter();",
            ),
            accessor: TextTransform::replace(r#"searchParams\.get\(['"](\w+)['"]\)"#, "router.query.$1"),
        }
    }
}

impl Default for RuntimeApiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for RuntimeApiAdapter {
    fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String> {
        let result = self.declaration.apply(source, ctx)?;
        self.accessor.apply(&result, ctx)
    }

    fn describe(&self) -> String {
        "Rewrite searchParams accessors to router.query property paths".to_string()
    }
}
