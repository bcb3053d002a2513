//! The text-style lookup seam.
//!
//! Style names live in the host document, not on the node, so resolving one
//! is an awaited call. Callers only ever see "a name" or "no name": a failed
//! lookup is indistinguishable from a node without a style.

use std::collections::HashMap;
use std::future::Future;

use lrn_core::node::TextNode;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleLookupError {
    #[error("style lookup for '{style_id}' failed: {reason}")]
    Failed { style_id: String, reason: String },
}

/// Resolves a text style id to its display name.
pub trait StyleResolver: Send + Sync {
    /// `Ok(None)` when the id is unknown.
    fn resolve_style_name(
        &self,
        style_id: &str,
    ) -> impl Future<Output = Result<Option<String>, StyleLookupError>> + Send;
}

impl<R: StyleResolver> StyleResolver for &R {
    fn resolve_style_name(
        &self,
        style_id: &str,
    ) -> impl Future<Output = Result<Option<String>, StyleLookupError>> + Send {
        (**self).resolve_style_name(style_id)
    }
}

/// A resolver for documents without styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleResolver for NoStyles {
    fn resolve_style_name(
        &self,
        _style_id: &str,
    ) -> impl Future<Output = Result<Option<String>, StyleLookupError>> + Send {
        std::future::ready(Ok(None))
    }
}

/// An in-memory id → name table, as shipped alongside an exported selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    styles: HashMap<String, String>,
}

impl StyleTable {
    #[must_use]
    pub const fn new(styles: HashMap<String, String>) -> Self {
        Self { styles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<(String, String)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl StyleResolver for StyleTable {
    fn resolve_style_name(
        &self,
        style_id: &str,
    ) -> impl Future<Output = Result<Option<String>, StyleLookupError>> + Send {
        std::future::ready(Ok(self.styles.get(style_id).cloned()))
    }
}

/// The non-empty style name of a text node, if one resolves.
///
/// A missing or empty style id short-circuits without calling the resolver.
pub async fn text_style_name<R: StyleResolver>(node: &TextNode, styles: &R) -> Option<String> {
    let style_id = node.text_style_id.as_deref().filter(|id| !id.is_empty())?;

    match styles.resolve_style_name(style_id).await {
        Ok(name) => name.filter(|name| !name.is_empty()),
        Err(error) => {
            tracing::debug!(node = %node.id, %error, "text style lookup failed; omitting style");
            None
        }
    }
}
