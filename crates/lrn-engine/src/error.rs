//! Engine error types.
//!
//! Neither error ever leaves a single node's boundary: [`NamingError`] turns
//! into "keep the original name", [`RenameError`] into a logged
//! `RenameFailure` while the walk continues.

use lrn_core::CoreError;
use thiserror::Error;

/// Raised while composing a name for one node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The node's payload could not be decoded for its type.
    #[error("cannot name unreadable node {id}: {reason}")]
    Unreadable { id: String, reason: String },
}

/// Raised while visiting one node during a recursive rename.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// A corrupt entry in a child array.
    #[error("unreadable node {id}: {reason}")]
    Unreadable { id: String, reason: String },

    /// The host refused the name write.
    #[error("failed to write name: {0}")]
    Write(#[from] CoreError),
}
