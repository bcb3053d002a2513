//! Per-class name composers.
//!
//! Each composer gathers an ordered list of optional fragments, each gated by
//! one settings flag, joins them with `" - "`, and falls back to a fixed
//! class name when nothing survives.

mod container;
mod shape;
mod text;

pub use container::compose_container_name;
pub use shape::compose_shape_name;
pub use text::compose_text_name;
