use lrn_core::Settings;
use lrn_core::enums::ContainerType;
use lrn_core::node::ContainerNode;

use crate::format::{Fragments, format_dimensions, format_opacity, quote_text};
use crate::plural::{Locale, elements_count_text};
use crate::text::{find_first_text_content, find_header_from_child, find_header_text};

const fn container_label(container: ContainerType) -> &'static str {
    match container {
        ContainerType::Frame => "Frame",
        ContainerType::Group => "Group",
    }
}

/// Resolve the container's title text in priority order: most prominent
/// direct text child, then first non-blank text child, then (if enabled) the
/// header of a single nested container.
fn title_text(node: &ContainerNode, settings: &Settings) -> Option<String> {
    let header = find_header_text(&node.children);
    if !header.is_empty() {
        return Some(header);
    }

    let first = find_first_text_content(&node.children);
    if !first.is_empty() {
        return Some(first);
    }

    if settings.use_auto_layout_names {
        let nested = find_header_from_child(node);
        if !nested.is_empty() {
            return Some(nested);
        }
    }

    None
}

/// Name for a frame or group: title text, type, size, child count, opacity.
#[must_use]
pub fn compose_container_name(node: &ContainerNode, settings: &Settings, locale: Locale) -> String {
    let mut fragments = Fragments::new();

    if settings.use_first_text_content {
        fragments.push(title_text(node, settings).map(|text| quote_text(&text)));
    }
    if settings.include_container_type {
        fragments.push(Some(container_label(node.container).to_string()));
    }
    if settings.include_container_size {
        fragments.push(format_dimensions(node.width, node.height));
    }
    if settings.include_children_count {
        fragments.push(Some(elements_count_text(node.children.len(), locale)));
    }
    if settings.include_container_opacity {
        fragments.push(format_opacity(node.opacity));
    }

    fragments.finish(container_label(node.container))
}
