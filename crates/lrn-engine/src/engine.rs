//! Routing a node to its composer.

use lrn_core::node::Node;
use lrn_core::{NodeClass, Settings};

use crate::compose::{compose_container_name, compose_shape_name, compose_text_name};
use crate::error::NamingError;
use crate::plural::Locale;
use crate::style::{NoStyles, StyleResolver};

/// Name generation bound to one immutable set of settings.
///
/// Settings, locale and style resolver are fixed for the engine's lifetime,
/// so a whole rename operation observes a single configuration.
#[derive(Debug, Clone)]
pub struct NameEngine<R = NoStyles> {
    settings: Settings,
    locale: Locale,
    styles: R,
}

impl NameEngine<NoStyles> {
    /// An engine for documents without text styles.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self::with_styles(settings, NoStyles)
    }
}

impl<R> NameEngine<R> {
    #[must_use]
    pub const fn with_styles(settings: Settings, styles: R) -> Self {
        Self {
            settings,
            locale: Locale::English,
            styles,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

impl<R: StyleResolver> NameEngine<R> {
    /// Generate a descriptive name for `node`.
    ///
    /// Returns the current name unchanged when the node's class is disabled,
    /// component-like or unknown, or when composing fails.
    pub async fn generate_name(&self, node: &Node) -> String {
        match self.try_generate_name(node).await {
            Ok(name) => name,
            Err(error) => {
                tracing::debug!(id = node.id(), %error, "keeping original name");
                node.name().to_string()
            }
        }
    }

    async fn try_generate_name(&self, node: &Node) -> Result<String, NamingError> {
        let settings = &self.settings;

        match node {
            Node::Text(text) if settings.enable_text_layers => {
                Ok(compose_text_name(text, settings, &self.styles).await)
            }
            Node::Shape(shape) if settings.enable_figures => {
                Ok(compose_shape_name(shape, settings))
            }
            Node::Container(container) if settings.enable_containers => {
                Ok(compose_container_name(container, settings, self.locale))
            }
            Node::Unreadable(unreadable) if self.class_enabled(node.class()) => {
                Err(NamingError::Unreadable {
                    id: unreadable.id.clone(),
                    reason: unreadable.reason.clone(),
                })
            }
            _ => Ok(node.name().to_string()),
        }
    }

    const fn class_enabled(&self, class: NodeClass) -> bool {
        match class {
            NodeClass::Text => self.settings.enable_text_layers,
            NodeClass::Shape => self.settings.enable_figures,
            NodeClass::Container => self.settings.enable_containers,
            NodeClass::Component | NodeClass::Unknown => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn disabled_class_passes_name_through() {
        let node = Node::from_value(json!({
            "id": "t", "name": "Original", "type": "TEXT", "characters": "Hello"
        }));
        let engine = NameEngine::new(Settings {
            enable_text_layers: false,
            ..Settings::default()
        });
        assert_eq!(engine.generate_name(&node).await, "Original");
    }

    #[tokio::test]
    async fn components_and_unknown_types_pass_through() {
        let engine = NameEngine::new(Settings::default());
        for tag in ["COMPONENT", "COMPONENT_SET", "INSTANCE", "SLICE", "SECTION"] {
            let node = Node::from_value(json!({"id": "x", "name": "Keep me", "type": tag}));
            assert_eq!(engine.generate_name(&node).await, "Keep me", "{tag}");
        }
    }

    #[tokio::test]
    async fn routes_each_class_to_its_composer() {
        let engine = NameEngine::new(Settings::default());

        let text = Node::from_value(json!({"id": "t", "name": "t", "type": "TEXT", "characters": "Hi"}));
        assert_eq!(engine.generate_name(&text).await, "\"Hi\"");

        let shape = Node::from_value(json!({"id": "s", "name": "s", "type": "STAR", "width": 10, "height": 10}));
        assert_eq!(engine.generate_name(&shape).await, "Star - 10x10");

        let group = Node::from_value(json!({"id": "g", "name": "g", "type": "GROUP", "children": []}));
        assert_eq!(engine.generate_name(&group).await, "Group - 0 elements");
    }

    #[tokio::test]
    async fn unreadable_nodes_keep_their_name() {
        let engine = NameEngine::new(Settings::default());
        let node = Node::from_value(json!({
            "id": "t", "name": "Broken", "type": "GROUP", "children": {"not": "a list"}
        }));
        assert!(matches!(node, Node::Unreadable(_)));
        assert_eq!(engine.generate_name(&node).await, "Broken");
    }

    #[tokio::test]
    async fn locale_reaches_the_container_composer() {
        let engine = NameEngine::new(Settings {
            use_first_text_content: false,
            include_container_type: false,
            ..Settings::default()
        })
        .with_locale(Locale::Russian);
        let frame = Node::from_value(json!({
            "id": "f", "name": "f", "type": "FRAME",
            "children": [{"id": "a", "name": "a", "type": "LINE"}]
        }));
        assert_eq!(engine.generate_name(&frame).await, "1 элемент");
    }
}
