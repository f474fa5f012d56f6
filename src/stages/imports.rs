//! Import specifier rewriting for the target runtime.

use super::components::UI_COMPONENTS;
use crate::context::ConversionContext;
use crate::error::Result;
use crate::transform::Transform;

/// Alias prefixes rewritten to relative paths, after the component-specific
/// imports have been handled (those share the `@/components/` prefix).
const ALIAS_PREFIXES: [&str; 3] = ["lib/", "components/", "contexts/"];

/// Rewrites module import specifiers to the target runtime's layout.
///
/// Steps run in a fixed order:
/// 1. strip `'use client'` directives,
/// 2. inject a React default import where hooks are used without one,
/// 3. repoint router and search-params imports at `next/router`,
/// 4. rewrite component imports from the `@/` alias to relative paths and
///    rename the imported identifiers to their Green variants,
/// 5. rewrite the remaining generic alias prefixes to relative paths.
///
/// After this stage no `@/` alias specifier remains; relative correctness
/// depends entirely on the depth supplied by the caller.
pub struct ImportRewriter;

impl ImportRewriter {
    pub fn new() -> Self {
        Self
    }

    fn strip_directives(text: &str) -> String {
        text.replace("'use client';", "")
            .replace("\"use client\";", "")
    }

    // Mirrors the prototype converter exactly: a document importing
    // `{ useEffect }` without `{ useState }` is left alone by the first
    // branch, and only router-importing documents get a prepended import.
    fn inject_react_import(text: &str) -> String {
        if text.contains("import { useState") || text.contains("import { useEffect") {
            text.replace("import { useState", "import React, { useState")
        } else if text.contains("import { useRouter }") && !text.contains("import React") {
            format!("import React from 'react';\n{text}")
        } else {
            text.to_string()
        }
    }

    fn rewrite_router_imports(text: &str) -> String {
        text.replace(
            "import { useRouter } from 'next/navigation';",
            "import { useRouter } from 'next/router';",
        )
        .replace(
            "import { useRouter } from \"next/navigation\";",
            "import { useRouter } from \"next/router\";",
        )
        .replace(
            "import { useSearchParams } from 'next/navigation';",
            "import { useRouter } from 'next/router';",
        )
        .replace(
            "import { useSearchParams } from \"next/navigation\";",
            "import { useRouter } from \"next/router\";",
        )
    }

    fn rewrite_component_imports(text: &str, prefix: &str) -> String {
        let mut result = text.to_string();
        for component in &UI_COMPONENTS {
            let name = component.name;
            let renamed = component.renamed();
            result = result.replace(
                &format!("import {name} from '@/components/ui/{name}';"),
                &format!("import {renamed} from '{prefix}components/ui/{renamed}';"),
            );
            result = result.replace(
                &format!("import {name} from \"@/components/ui/{name}\";"),
                &format!("import {renamed} from \"{prefix}components/ui/{renamed}\";"),
            );
        }
        result
    }

    fn rewrite_alias_prefixes(text: &str, prefix: &str) -> String {
        let mut result = text.to_string();
        for alias in ALIAS_PREFIXES {
            result = result.replace(
                &format!("from '@/{alias}"),
                &format!("from '{prefix}{alias}"),
            );
            result = result.replace(
                &format!("from \"@/{alias}"),
                &format!("from \"{prefix}{alias}"),
            );
        }
        result
    }
}

impl Default for ImportRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ImportRewriter {
    fn apply(&self, source: &str, ctx: &ConversionContext) -> Result<String> {
        let prefix = ctx.relative_prefix();
        let text = Self::strip_directives(source);
        let text = Self::inject_react_import(&text);
        let text = Self::rewrite_router_imports(&text);
        let text = Self::rewrite_component_imports(&text, &prefix);
        Ok(Self::rewrite_alias_prefixes(&text, &prefix))
    }

    fn describe(&self) -> String {
        "Rewrite aliased imports to relative paths and repoint runtime hooks".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(input: &str, depth: usize) -> String {
        ImportRewriter::new()
            .apply(input, &ConversionContext::new(depth))
            .unwrap()
    }

    #[test]
    fn strips_use_client_directive_in_both_quote_styles() {
        assert_eq!(rewrite("'use client';\nlet x;", 0), "\nlet x;");
        assert_eq!(rewrite("\"use client\";\nlet x;", 0), "\nlet x;");
    }

    #[test]
    fn repoints_navigation_router_import() {
        assert_eq!(
            rewrite("import { useRouter } from 'next/navigation';", 0),
            "import React from 'react';\nimport { useRouter } from 'next/router';"
        );
    }

    #[test]
    fn repurposes_search_params_import_as_router_import() {
        assert_eq!(
            rewrite("import { useSearchParams } from \"next/navigation\";", 0),
            "import { useRouter } from \"next/router\";"
        );
    }

    #[test]
    fn widens_hook_import_to_include_react_default() {
        assert_eq!(
            rewrite("import { useState, useEffect } from 'react';", 0),
            "import React, { useState, useEffect } from 'react';"
        );
    }

    #[test]
    fn use_effect_alone_does_not_gain_react_import() {
        // Quirk preserved from the prototype converter.
        let input = "import { useEffect } from 'react';";
        assert_eq!(rewrite(input, 0), input);
    }

    #[test]
    fn component_import_gains_relative_path_and_green_name() {
        assert_eq!(
            rewrite("import Button from '@/components/ui/Button';", 3),
            "import ButtonGreen from '../../../components/ui/ButtonGreen';"
        );
        assert_eq!(
            rewrite("import Modal from \"@/components/ui/Modal\";", 1),
            "import ModalGreen from \"../components/ui/ModalGreen\";"
        );
    }

    #[test]
    fn generic_alias_prefixes_are_relativized() {
        assert_eq!(
            rewrite("import { api } from '@/lib/api';", 2),
            "import { api } from '../../lib/api';"
        );
        assert_eq!(
            rewrite("import { useAuth } from \"@/contexts/AuthContext\";", 1),
            "import { useAuth } from \"../contexts/AuthContext\";"
        );
    }

    #[test]
    fn component_imports_survive_the_generic_components_rewrite() {
        let input = "import Card from '@/components/ui/Card';\nimport Nav from '@/components/Nav';";
        let output = rewrite(input, 2);
        assert_eq!(
            output,
            "import CardGreen from '../../components/ui/CardGreen';\nimport Nav from '../../components/Nav';"
        );
    }

    #[test]
    fn no_alias_specifier_survives() {
        let input = "import Badge from '@/components/ui/Badge';\nimport { log } from '@/lib/log';\nimport { Theme } from \"@/contexts/Theme\";";
        let output = rewrite(input, 1);
        assert!(!output.contains("@/"));
    }
}
