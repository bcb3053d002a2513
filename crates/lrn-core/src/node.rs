//! The design-document node model.
//!
//! A [`Node`] is a snapshot of one host scene-graph element, decoded from the
//! host's JSON shape (`type` discriminant, camelCase fields). Optional
//! attributes of the wrong JSON type decode as absent, so only that
//! attribute's name fragment is lost. A structurally corrupt payload (no
//! string `id`/`name`, non-array `children`) becomes [`Node::Unreadable`]
//! without affecting its siblings or parent, and an unrecognised type tag
//! becomes [`Node::Other`].
//!
//! The only field this workspace ever writes is `name`, through
//! [`Node::set_name`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::enums::{ComponentType, ContainerType, NodeClass, ShapeType, TEXT_TYPE};
use crate::errors::CoreError;
use crate::paint::Paint;

// ---------------------------------------------------------------------------
// NumberOrMixed
// ---------------------------------------------------------------------------

/// A numeric property that the host may report as "mixed" (for example a
/// text node with several font sizes, or a rectangle with per-corner radii).
///
/// Any non-numeric JSON value decodes as [`NumberOrMixed::Mixed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberOrMixed {
    Number(f64),
    Mixed,
}

impl NumberOrMixed {
    #[must_use]
    pub const fn number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Mixed => None,
        }
    }
}

impl<'de> Deserialize<'de> for NumberOrMixed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_f64().map_or(Self::Mixed, Self::Number))
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

const fn full_opacity() -> f64 {
    1.0
}

/// Anything but a JSON number (`null`, `"0.5"`, the mixed marker) reads as
/// fully opaque.
fn opacity_or_full<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64().unwrap_or(1.0))
}

fn number_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Non-array paint fields (`null`, the mixed marker) decode as "no paints".
fn paints_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<Paint>>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// A `TEXT` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub characters: Option<String>,
    #[serde(default, deserialize_with = "paints_or_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default = "full_opacity", deserialize_with = "opacity_or_full")]
    pub opacity: f64,
    #[serde(default, deserialize_with = "string_or_none")]
    pub text_style_id: Option<String>,
    #[serde(default)]
    pub font_size: Option<NumberOrMixed>,
    #[serde(default)]
    pub font_weight: Option<NumberOrMixed>,
}

/// A vector shape node (rectangle, ellipse, polygon, star, vector, line,
/// boolean operation).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub shape: ShapeType,
    #[serde(default, deserialize_with = "number_or_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "paints_or_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, deserialize_with = "paints_or_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default)]
    pub stroke_weight: Option<NumberOrMixed>,
    #[serde(default)]
    pub corner_radius: Option<NumberOrMixed>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub top_left_radius: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub top_right_radius: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub bottom_right_radius: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub bottom_left_radius: Option<f64>,
    #[serde(default = "full_opacity", deserialize_with = "opacity_or_full")]
    pub opacity: f64,
}

/// A `FRAME` or `GROUP`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub container: ContainerType,
    #[serde(default, deserialize_with = "number_or_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub height: Option<f64>,
    #[serde(default = "full_opacity", deserialize_with = "opacity_or_full")]
    pub opacity: f64,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A `COMPONENT`, `COMPONENT_SET` or `INSTANCE`. Opaque to naming.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component: ComponentType,
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

/// A node whose type tag is not part of any known class (slices, sections,
/// stickies, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    pub id: String,
    pub name: String,
    pub type_tag: String,
}

/// A node whose payload could not be decoded for its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableNode {
    pub id: String,
    pub name: String,
    pub type_tag: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One element of the design-document scene graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Shape(ShapeNode),
    Container(ContainerNode),
    Component(ComponentNode),
    Other(OtherNode),
    Unreadable(UnreadableNode),
}

impl Node {
    /// Decode a node (and its subtree) from host JSON. Never fails.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let id = str_field(&value, "id");
        let name = str_field(&value, "name");
        let type_tag = str_field(&value, "type");

        let decoded = match NodeClass::classify(&type_tag) {
            NodeClass::Text => serde_json::from_value(value).map(Self::Text),
            NodeClass::Shape => serde_json::from_value(value).map(Self::Shape),
            NodeClass::Container => serde_json::from_value(value).map(Self::Container),
            NodeClass::Component => serde_json::from_value(value).map(Self::Component),
            NodeClass::Unknown if value.is_object() => {
                return Self::Other(OtherNode { id, name, type_tag });
            }
            NodeClass::Unknown => {
                return Self::Unreadable(UnreadableNode {
                    id,
                    name,
                    type_tag,
                    reason: String::from("node is not a JSON object"),
                });
            }
        };

        decoded.unwrap_or_else(|error| {
            Self::Unreadable(UnreadableNode {
                id,
                name,
                type_tag,
                reason: error.to_string(),
            })
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Text(node) => &node.id,
            Self::Shape(node) => &node.id,
            Self::Container(node) => &node.id,
            Self::Component(node) => &node.id,
            Self::Other(node) => &node.id,
            Self::Unreadable(node) => &node.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text(node) => &node.name,
            Self::Shape(node) => &node.name,
            Self::Container(node) => &node.name,
            Self::Component(node) => &node.name,
            Self::Other(node) => &node.name,
            Self::Unreadable(node) => &node.name,
        }
    }

    /// The host type tag, e.g. `"RECTANGLE"`.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Text(_) => TEXT_TYPE,
            Self::Shape(node) => node.shape.as_str(),
            Self::Container(node) => node.container.as_str(),
            Self::Component(node) => node.component.as_str(),
            Self::Other(node) => &node.type_tag,
            Self::Unreadable(node) => &node.type_tag,
        }
    }

    /// Capability class of this node's type tag.
    #[must_use]
    pub fn class(&self) -> NodeClass {
        NodeClass::classify(self.type_tag())
    }

    /// Direct children, for node kinds that expose them.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match self {
            Self::Container(node) => Some(&node.children),
            Self::Component(node) => node.children.as_deref(),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut [Self]> {
        match self {
            Self::Container(node) => Some(&mut node.children),
            Self::Component(node) => node.children.as_deref_mut(),
            _ => None,
        }
    }

    /// Replace the node's name. This is the only mutation lrn performs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnreadableNode`] for nodes that failed to decode;
    /// the host cannot address them safely.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let slot = match self {
            Self::Text(node) => &mut node.name,
            Self::Shape(node) => &mut node.name,
            Self::Container(node) => &mut node.name,
            Self::Component(node) => &mut node.name,
            Self::Other(node) => &mut node.name,
            Self::Unreadable(node) => {
                return Err(CoreError::UnreadableNode {
                    id: node.id.clone(),
                    reason: node.reason.clone(),
                });
            }
        };
        *slot = name.into();
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
