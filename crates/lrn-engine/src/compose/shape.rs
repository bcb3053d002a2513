use lrn_core::Settings;
use lrn_core::node::ShapeNode;

use crate::color::{first_solid_hex, stroke_info};
use crate::format::{Fragments, format_dimensions, format_opacity};
use crate::shape::{corner_radius, shape_label};

const FALLBACK: &str = "Shape";

/// Name for a shape: label, size, fill, stroke, radius, opacity.
#[must_use]
pub fn compose_shape_name(node: &ShapeNode, settings: &Settings) -> String {
    let mut fragments = Fragments::new();

    if settings.include_shape_type {
        fragments.push(Some(shape_label(node).to_string()));
    }
    if settings.include_shape_size {
        fragments.push(format_dimensions(node.width, node.height));
    }
    if settings.include_fill_color {
        fragments.push(first_solid_hex(node.fills.as_deref()));
    }
    if settings.include_stroke_settings {
        fragments.push(stroke_info(node.strokes.as_deref(), node.stroke_weight));
    }
    if settings.include_corner_radius {
        fragments.push(corner_radius(node));
    }
    if settings.include_figure_opacity {
        fragments.push(format_opacity(node.opacity));
    }

    fragments.finish(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrn_core::node::Node;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn shape(value: Value) -> ShapeNode {
        match Node::from_value(value) {
            Node::Shape(shape) => shape,
            other => panic!("expected shape, got {other:?}"),
        }
    }

    fn card_background() -> ShapeNode {
        shape(json!({
            "id": "r", "name": "Rectangle 14", "type": "RECTANGLE",
            "width": 200, "height": 100,
            "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.5, "b": 1}}],
            "strokes": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}],
            "strokeWeight": 2,
            "cornerRadius": 8,
            "opacity": 0.9
        }))
    }

    #[test]
    fn full_composition() {
        assert_eq!(
            compose_shape_name(&card_background(), &Settings::default()),
            "Rectangle - 200x100 - #0080ff - Stroke: #ff0000 2px - Radius: 8px - Opacity: 90%"
        );
    }

    #[test]
    fn flags_gate_each_fragment() {
        let settings = Settings {
            include_shape_size: false,
            include_stroke_settings: false,
            include_figure_opacity: false,
            ..Settings::default()
        };
        assert_eq!(
            compose_shape_name(&card_background(), &settings),
            "Rectangle - #0080ff - Radius: 8px"
        );
    }

    #[test]
    fn all_flags_off_falls_back() {
        let settings = Settings {
            enable_figures: true,
            ..Settings::all_disabled()
        };
        assert_eq!(compose_shape_name(&card_background(), &settings), "Shape");
    }

    #[test]
    fn bare_vector_keeps_only_its_label() {
        let node = shape(json!({"id": "v", "name": "Vector 2", "type": "VECTOR", "fills": []}));
        assert_eq!(compose_shape_name(&node, &Settings::default()), "Vector");
    }

    #[test]
    fn circle_with_image_fill() {
        let node = shape(json!({
            "id": "e", "name": "Avatar", "type": "ELLIPSE",
            "width": 48, "height": 48.5,
            "fills": [{"type": "IMAGE", "imageHash": "abc"}]
        }));
        assert_eq!(
            compose_shape_name(&node, &Settings::default()),
            "Circle - 48x49"
        );
    }
}
