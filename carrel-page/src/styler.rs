//! Navigation styler: decorates server-rendered markup with Bootstrap
//! utility classes and highlights the sidebar link for the current page.
//!
//! The class passes are data, not code: the built-in manifest is embedded
//! JSON, parsed once and validated against the selector subset grammar.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::paths;
use crate::selector::{ParseError, Selector};
use crate::tree::{DocumentTree, ElementHandle};

/// Sidebar links checked against the current URL.
const SIDEBAR_LINKS: &str = ".sidebar-nav a";
/// Class marking the list item for the current page.
const ACTIVE_CLASS: &str = "active";

const BUILTIN_JSON: &str = include_str!("../data/passes.json");

/// Manifest loading failures.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest selector `{selector}` is not supported: {source}")]
    Selector {
        selector: String,
        source: ParseError,
    },
}

/// One styling pass: classes for every element matching a scope selector
/// and, optionally, for matching descendants of each scope element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPass {
    pub scope: String,
    #[serde(default)]
    pub scope_classes: Vec<String>,
    #[serde(default)]
    pub child: Option<String>,
    #[serde(default)]
    pub child_classes: Vec<String>,
}

/// Ordered list of class passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StyleManifest {
    pub passes: Vec<ClassPass>,
}

impl StyleManifest {
    /// Parse a manifest from JSON, validating every selector against the
    /// subset grammar the in-memory engine understands.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a selector does not
    /// parse.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(raw)?;
        for pass in &manifest.passes {
            validate_selector(&pass.scope)?;
            if let Some(child) = &pass.child {
                validate_selector(child)?;
            }
        }
        Ok(manifest)
    }

    /// The passes shipped for the Carrel site: sidebar and main-content
    /// list-groups, staff buttons, and form controls.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<StyleManifest> = OnceLock::new();
        BUILTIN.get_or_init(|| match StyleManifest::from_json(BUILTIN_JSON) {
            Ok(manifest) => manifest,
            Err(err) => {
                log::error!("built-in style manifest failed to load: {err}");
                StyleManifest::default()
            }
        })
    }
}

fn validate_selector(selector: &str) -> Result<(), ManifestError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|source| ManifestError::Selector {
            selector: selector.to_string(),
            source,
        })
}

/// Apply every pass in `manifest` to `doc`.
///
/// Class addition has set semantics, so re-running the pass leaves the
/// document unchanged. Scopes that match nothing are no-ops.
pub fn apply_manifest<D: DocumentTree>(doc: &D, manifest: &StyleManifest) {
    for pass in &manifest.passes {
        let scopes = doc.select(&pass.scope);
        if scopes.is_empty() {
            log::debug!("style pass `{}` matched no elements", pass.scope);
            continue;
        }
        for scope in &scopes {
            for class in &pass.scope_classes {
                scope.add_class(class);
            }
            if let Some(child) = &pass.child {
                for el in scope.select(child) {
                    for class in &pass.child_classes {
                        el.add_class(class);
                    }
                }
            }
        }
    }
}

/// Mark the sidebar link for the current page.
///
/// A link counts as current when the document URL ends with the link's
/// href, query strings stripped from both sides. The `active` class goes
/// on the link's parent list item.
pub fn mark_active_links<D: DocumentTree>(doc: &D) {
    let current = doc.url();
    for link in doc.select(SIDEBAR_LINKS) {
        let Some(href) = link.attr("href") else {
            continue;
        };
        if paths::is_current_page(&current, &href)
            && let Some(parent) = link.parent()
        {
            parent.add_class(ACTIVE_CLASS);
        }
    }
}

/// The full load-time styling run: built-in passes, then the active-link
/// highlight.
pub fn enhance<D: DocumentTree>(doc: &D) {
    apply_manifest(doc, StyleManifest::builtin());
    mark_active_links(doc);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_parses() {
        let manifest = StyleManifest::builtin();
        assert_eq!(manifest.passes.len(), 4);
        assert_eq!(manifest.passes[0].scope, ".sidebar-nav");
    }

    #[test]
    fn malformed_json_is_a_typed_error() {
        let err = StyleManifest::from_json("{ not json").expect_err("should fail");
        assert!(matches!(err, ManifestError::Json(_)));
    }

    #[test]
    fn out_of_grammar_selector_is_a_typed_error() {
        let raw = r#"{ "passes": [ { "scope": "ul > li" } ] }"#;
        let err = StyleManifest::from_json(raw).expect_err("should fail");
        match err {
            ManifestError::Selector { selector, .. } => assert_eq!(selector, "ul > li"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
