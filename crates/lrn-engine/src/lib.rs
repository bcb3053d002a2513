//! # lrn-engine
//!
//! The name generation engine: turns a node snapshot plus [`Settings`] into a
//! descriptive layer name, and applies it across a node tree.
//!
//! Layers, leaves first:
//! - [`format`], [`color`], [`shape`]: attribute extractors and number formatting
//! - [`text`]: header / text-priority resolution and truncation
//! - [`plural`]: child-count wording per locale
//! - [`style`]: the asynchronous text-style lookup seam
//! - [`compose`]: the text, shape and container composers
//! - [`engine`]: [`NameEngine::generate_name`], routing a node to its composer
//! - [`rename`]: recursive renaming with per-node failure isolation
//!
//! ```
//! use lrn_core::{Node, Settings};
//! use lrn_engine::NameEngine;
//!
//! # futures::executor::block_on(async {
//! let mut selection: Vec<Node> = serde_json::from_str(
//!     r#"[{"id": "1:1", "name": "Rectangle 14", "type": "RECTANGLE", "width": 40, "height": 40}]"#,
//! )
//! .expect("selection");
//!
//! let report = NameEngine::new(Settings::default())
//!     .rename_selection(&mut selection)
//!     .await;
//!
//! assert_eq!(selection[0].name(), "Rectangle - 40x40");
//! assert_eq!(report.renamed_count, 1);
//! # });
//! ```
//!
//! [`Settings`]: lrn_core::Settings

pub mod color;
pub mod compose;
pub mod engine;
pub mod error;
pub mod format;
pub mod plural;
pub mod rename;
pub mod shape;
pub mod style;
pub mod text;

pub use engine::NameEngine;
pub use error::{NamingError, RenameError};
pub use plural::Locale;
pub use rename::{RenameJournal, rename_selection};
pub use style::{NoStyles, StyleLookupError, StyleResolver, StyleTable};
