use lrn_core::Settings;
use lrn_core::node::TextNode;

use crate::color::first_solid_hex;
use crate::format::{Fragments, format_opacity, quote_text};
use crate::style::{StyleResolver, text_style_name};

const FALLBACK: &str = "Text";

/// Name for a text layer: quoted content, color, style, opacity.
pub async fn compose_text_name<R: StyleResolver>(
    node: &TextNode,
    settings: &Settings,
    styles: &R,
) -> String {
    let mut fragments = Fragments::new();

    if settings.use_text_content {
        let content = node.characters.as_deref().unwrap_or_default().trim();
        fragments.push((!content.is_empty()).then(|| quote_text(content)));
    }

    if settings.include_text_color {
        fragments.push(first_solid_hex(node.fills.as_deref()));
    }

    if settings.include_text_style {
        let style = text_style_name(node, styles).await;
        fragments.push(style.map(|name| format!("Style: {name}")));
    }

    if settings.include_text_opacity {
        fragments.push(format_opacity(node.opacity));
    }

    fragments.finish(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{NoStyles, StyleTable};
    use lrn_core::node::Node;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn text(value: Value) -> TextNode {
        match Node::from_value(value) {
            Node::Text(text) => text,
            other => panic!("expected text, got {other:?}"),
        }
    }

    fn styled_heading() -> TextNode {
        text(json!({
            "id": "t", "name": "Text 3", "type": "TEXT",
            "characters": "  Welcome back  ",
            "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.2, "b": 0.2}}],
            "textStyleId": "S:h1",
            "opacity": 0.5
        }))
    }

    #[tokio::test]
    async fn full_composition() {
        let styles: StyleTable = [("S:h1".to_string(), "Heading/H1".to_string())]
            .into_iter()
            .collect();
        let name = compose_text_name(&styled_heading(), &Settings::default(), &styles).await;
        assert_eq!(
            name,
            "\"Welcome back\" - #333333 - Style: Heading/H1 - Opacity: 50%"
        );
    }

    #[tokio::test]
    async fn long_content_is_truncated() {
        let node = text(json!({
            "id": "t", "name": "t", "type": "TEXT",
            "characters": "The quick brown fox jumps over the lazy dog"
        }));
        let settings = Settings {
            include_text_color: false,
            ..Settings::default()
        };
        let name = compose_text_name(&node, &settings, &NoStyles).await;
        assert_eq!(name, "\"The quick brown fox jumps over...\"");
    }

    #[tokio::test]
    async fn all_flags_off_falls_back() {
        let settings = Settings {
            enable_text_layers: true,
            ..Settings::all_disabled()
        };
        let name = compose_text_name(&styled_heading(), &settings, &NoStyles).await;
        assert_eq!(name, "Text");
    }

    #[tokio::test]
    async fn blank_text_without_paint_falls_back() {
        let node = text(json!({
            "id": "t", "name": "t", "type": "TEXT",
            "characters": "   ",
            "fills": [{"type": "GRADIENT_LINEAR"}]
        }));
        let name = compose_text_name(&node, &Settings::default(), &NoStyles).await;
        assert_eq!(name, "Text");
    }

    #[tokio::test]
    async fn unknown_style_is_omitted() {
        let settings = Settings {
            use_text_content: false,
            include_text_color: false,
            include_text_opacity: false,
            ..Settings::default()
        };
        let name = compose_text_name(&styled_heading(), &settings, &NoStyles).await;
        assert_eq!(name, "Text");
    }
}
