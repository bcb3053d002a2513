//! Shape labels and corner radius formatting.

use lrn_core::enums::ShapeType;
use lrn_core::node::{Node, NumberOrMixed, ShapeNode};

use crate::format::{format_rounded, round_half_up};

/// Display label for a shape. Ellipses whose sides differ by less than one
/// unit are circles.
#[must_use]
pub fn shape_label(shape: &ShapeNode) -> &'static str {
    match shape.shape {
        ShapeType::Rectangle => "Rectangle",
        ShapeType::Ellipse => {
            let is_circle = shape
                .width
                .zip(shape.height)
                .is_some_and(|(width, height)| (width - height).abs() < 1.0);
            if is_circle { "Circle" } else { "Ellipse" }
        }
        ShapeType::Polygon => "Polygon",
        ShapeType::Star => "Star",
        ShapeType::Vector => "Vector",
        ShapeType::Line => "Line",
        ShapeType::BooleanOperation => "Boolean",
    }
}

/// Label for any node; non-shapes get the generic `"Shape"`.
#[must_use]
pub fn node_shape_label(node: &Node) -> &'static str {
    match node {
        Node::Shape(shape) => shape_label(shape),
        _ => "Shape",
    }
}

/// `"Radius: Npx"` or `"Radius: a/b/c/dpx"`.
///
/// A uniform radius of zero emits nothing. Mixed radii are read clockwise
/// from the top-left corner; when every non-zero corner rounds to the same
/// value the single-value form is used, otherwise all four rounded corners
/// (zeros included) are listed.
#[must_use]
pub fn corner_radius(shape: &ShapeNode) -> Option<String> {
    match shape.corner_radius? {
        NumberOrMixed::Number(radius) if radius > 0.0 => {
            Some(format!("Radius: {}px", format_rounded(radius)))
        }
        NumberOrMixed::Number(_) => None,
        NumberOrMixed::Mixed => mixed_corner_radius(shape),
    }
}

#[allow(clippy::float_cmp)]
fn mixed_corner_radius(shape: &ShapeNode) -> Option<String> {
    let corners = [
        shape.top_left_radius,
        shape.top_right_radius,
        shape.bottom_right_radius,
        shape.bottom_left_radius,
    ]
    .map(|corner| corner.unwrap_or(0.0));

    let mut rounded_nonzero = corners
        .iter()
        .filter(|corner| **corner > 0.0)
        .map(|corner| round_half_up(*corner));
    let first = rounded_nonzero.next()?;

    if rounded_nonzero.all(|corner| corner == first) {
        return Some(format!("Radius: {}px", format_rounded(first)));
    }

    let listed = corners
        .iter()
        .map(|corner| format_rounded(*corner))
        .collect::<Vec<_>>()
        .join("/");
    Some(format!("Radius: {listed}px"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn shape(value: Value) -> ShapeNode {
        match Node::from_value(value) {
            Node::Shape(shape) => shape,
            other => panic!("expected shape, got {other:?}"),
        }
    }

    #[rstest]
    #[case(100.0, 100.0, "Circle")]
    #[case(100.0, 100.9, "Circle")]
    #[case(100.0, 101.0, "Ellipse")]
    #[case(40.0, 20.0, "Ellipse")]
    fn circle_tolerance(#[case] width: f64, #[case] height: f64, #[case] expected: &str) {
        let node = shape(json!({
            "id": "e", "name": "Ellipse 1", "type": "ELLIPSE",
            "width": width, "height": height
        }));
        assert_eq!(shape_label(&node), expected);
    }

    #[test]
    fn ellipse_without_size_is_not_a_circle() {
        let node = shape(json!({"id": "e", "name": "E", "type": "ELLIPSE"}));
        assert_eq!(shape_label(&node), "Ellipse");
    }

    #[test]
    fn labels_for_every_shape_type() {
        for (tag, label) in [
            ("RECTANGLE", "Rectangle"),
            ("POLYGON", "Polygon"),
            ("STAR", "Star"),
            ("VECTOR", "Vector"),
            ("LINE", "Line"),
            ("BOOLEAN_OPERATION", "Boolean"),
        ] {
            let node = Node::from_value(json!({"id": "s", "name": "s", "type": tag}));
            assert_eq!(node_shape_label(&node), label);
        }
        let frame = Node::from_value(json!({"id": "f", "name": "f", "type": "FRAME"}));
        assert_eq!(node_shape_label(&frame), "Shape");
    }

    #[test]
    fn uniform_radius() {
        let node = shape(json!({"id": "r", "name": "r", "type": "RECTANGLE", "cornerRadius": 7.6}));
        assert_eq!(corner_radius(&node).as_deref(), Some("Radius: 8px"));

        let node = shape(json!({"id": "r", "name": "r", "type": "RECTANGLE", "cornerRadius": 0}));
        assert_eq!(corner_radius(&node), None);

        let node = shape(json!({"id": "r", "name": "r", "type": "VECTOR"}));
        assert_eq!(corner_radius(&node), None);
    }

    #[rstest]
    #[case([4.0, 8.0, 4.0, 8.0], Some("Radius: 4/8/4/8px"))]
    #[case([6.0, 6.0, 6.0, 6.0], Some("Radius: 6px"))]
    #[case([6.0, 0.0, 6.0, 0.0], Some("Radius: 6px"))]
    #[case([6.2, 5.8, 6.0, 6.4], Some("Radius: 6px"))]
    #[case([4.0, 0.0, 12.0, 0.0], Some("Radius: 4/0/12/0px"))]
    #[case([0.0, 0.0, 0.0, 0.0], None)]
    fn mixed_radius(#[case] corners: [f64; 4], #[case] expected: Option<&str>) {
        let node = shape(json!({
            "id": "r", "name": "r", "type": "RECTANGLE",
            "cornerRadius": "MIXED",
            "topLeftRadius": corners[0],
            "topRightRadius": corners[1],
            "bottomRightRadius": corners[2],
            "bottomLeftRadius": corners[3]
        }));
        assert_eq!(corner_radius(&node).as_deref(), expected);
    }
}
