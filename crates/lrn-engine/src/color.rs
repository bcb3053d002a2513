//! Fill and stroke color extraction.
//!
//! Only the first paint of a list is consulted, and only when it is a visible
//! solid paint.

use lrn_core::node::{Node, NumberOrMixed};
use lrn_core::paint::{Paint, Rgb};

use crate::format::{format_number, format_rounded, round_half_up};

/// `#rrggbb` with lowercase, zero-padded channels. Channels are not clamped:
/// a negative channel renders with a leading `-`, one above 1 with three
/// digits.
#[must_use]
pub fn color_to_hex(color: Rgb) -> String {
    format!(
        "#{}{}{}",
        channel_hex(color.r),
        channel_hex(color.g),
        channel_hex(color.b)
    )
}

#[allow(clippy::cast_possible_truncation)]
fn channel_hex(channel: f64) -> String {
    let value = round_half_up(channel * 255.0);
    if !value.is_finite() {
        return format_number(value);
    }
    if value < 0.0 {
        format!("-{:x}", (-value) as i64)
    } else {
        format!("{:02x}", value as i64)
    }
}

/// Hex color of the first paint, if it is a visible solid.
#[must_use]
pub fn first_solid_hex(paints: Option<&[Paint]>) -> Option<String> {
    paints?.first()?.visible_solid_color().map(color_to_hex)
}

/// Hex color of a node's first fill.
#[must_use]
pub fn fill_info(node: &Node) -> Option<String> {
    let fills = match node {
        Node::Text(text) => text.fills.as_deref(),
        Node::Shape(shape) => shape.fills.as_deref(),
        _ => None,
    };
    first_solid_hex(fills)
}

/// `"Stroke: #hex Npx"` from the first stroke. Weight defaults to 1 when
/// absent or mixed.
#[must_use]
pub fn stroke_info(strokes: Option<&[Paint]>, weight: Option<NumberOrMixed>) -> Option<String> {
    let hex = first_solid_hex(strokes)?;
    let weight = weight
        .and_then(NumberOrMixed::number)
        .map_or_else(|| String::from("1"), format_rounded);
    Some(format!("Stroke: {hex} {weight}px"))
}
