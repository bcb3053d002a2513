//! # lrn-core
//!
//! Core types shared across the lrn workspace.
//!
//! This crate provides the foundational types used by every other crate:
//! - The design-document node model (a closed sum type decoded from host JSON)
//! - Paints and colors
//! - Node type tags and their capability classes
//! - The 19-flag naming settings record
//! - Cross-cutting error types
//! - Batch rename response types

pub mod enums;
pub mod errors;
pub mod node;
pub mod paint;
pub mod responses;
pub mod settings;

pub use enums::NodeClass;
pub use errors::CoreError;
pub use node::Node;
pub use settings::Settings;
