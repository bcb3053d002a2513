//! Cross-cutting error types for lrn.
//!
//! Naming and traversal errors live in `lrn-engine`; configuration errors in
//! `lrn-config`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by the core model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The host handed us a node whose payload does not match its type tag.
    #[error("Node {id} could not be read: {reason}")]
    UnreadableNode { id: String, reason: String },

    /// A settings flag name that is not part of the schema.
    #[error("Unknown settings flag: {0}")]
    UnknownFlag(String),
}
