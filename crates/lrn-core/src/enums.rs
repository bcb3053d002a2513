//! Node type tags and the capability classes they map to.
//!
//! Type tags use the host's `SCREAMING_SNAKE_CASE` spelling (`"RECTANGLE"`,
//! `"COMPONENT_SET"`). Classification is a set of closed membership checks;
//! a tag outside every set is [`NodeClass::Unknown`] and is never an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a text node.
pub const TEXT_TYPE: &str = "TEXT";

/// Type tags classified as shapes.
pub const SHAPE_TYPES: &[&str] = &[
    "RECTANGLE",
    "ELLIPSE",
    "POLYGON",
    "STAR",
    "VECTOR",
    "LINE",
    "BOOLEAN_OPERATION",
];

/// Type tags classified as component-like (never renamed).
pub const COMPONENT_TYPES: &[&str] = &["COMPONENT", "COMPONENT_SET", "INSTANCE"];

/// Type tags classified as containers.
pub const CONTAINER_TYPES: &[&str] = &["FRAME", "GROUP"];

#[must_use]
pub fn is_shape_type(type_tag: &str) -> bool {
    SHAPE_TYPES.contains(&type_tag)
}

#[must_use]
pub fn is_component_type(type_tag: &str) -> bool {
    COMPONENT_TYPES.contains(&type_tag)
}

#[must_use]
pub fn is_container_type(type_tag: &str) -> bool {
    CONTAINER_TYPES.contains(&type_tag)
}

// ---------------------------------------------------------------------------
// NodeClass
// ---------------------------------------------------------------------------

/// Capability class of a node, derived from its type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeClass {
    Text,
    Shape,
    Container,
    Component,
    Unknown,
}

impl NodeClass {
    /// Classify a raw type tag.
    #[must_use]
    pub fn classify(type_tag: &str) -> Self {
        if type_tag == TEXT_TYPE {
            Self::Text
        } else if is_shape_type(type_tag) {
            Self::Shape
        } else if is_container_type(type_tag) {
            Self::Container
        } else if is_component_type(type_tag) {
            Self::Component
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Shape => "shape",
            Self::Container => "container",
            Self::Component => "component",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShapeType
// ---------------------------------------------------------------------------

/// Concrete type of a shape node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    BooleanOperation,
}

impl ShapeType {
    /// The host type tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContainerType
// ---------------------------------------------------------------------------

/// Concrete type of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    Frame,
    Group,
}

impl ContainerType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// Concrete type of a component-like node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Component,
    ComponentSet,
    Instance,
}

impl ComponentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
