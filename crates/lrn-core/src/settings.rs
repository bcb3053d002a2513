//! The naming settings record.
//!
//! Nineteen independent boolean switches grouped by node class. Field names
//! serialize in the camelCase spelling used by the settings store, and every
//! absent field defaults to `true`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    // Text layers
    pub enable_text_layers: bool,
    pub use_text_content: bool,
    pub include_text_color: bool,
    pub include_text_style: bool,
    pub include_text_opacity: bool,

    // Containers
    pub enable_containers: bool,
    pub include_container_type: bool,
    pub include_container_size: bool,
    pub include_children_count: bool,
    pub include_container_opacity: bool,
    pub use_first_text_content: bool,
    pub use_auto_layout_names: bool,

    // Figures
    pub enable_figures: bool,
    pub include_shape_type: bool,
    pub include_shape_size: bool,
    pub include_fill_color: bool,
    pub include_stroke_settings: bool,
    pub include_corner_radius: bool,
    pub include_figure_opacity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_text_layers: true,
            use_text_content: true,
            include_text_color: true,
            include_text_style: true,
            include_text_opacity: true,

            enable_containers: true,
            include_container_type: true,
            include_container_size: true,
            include_children_count: true,
            include_container_opacity: true,
            use_first_text_content: true,
            use_auto_layout_names: true,

            enable_figures: true,
            include_shape_type: true,
            include_shape_size: true,
            include_fill_color: true,
            include_stroke_settings: true,
            include_corner_radius: true,
            include_figure_opacity: true,
        }
    }
}

impl Settings {
    /// Flag names in schema order: text, containers, figures.
    pub const FLAG_NAMES: [&'static str; 19] = [
        "enableTextLayers",
        "useTextContent",
        "includeTextColor",
        "includeTextStyle",
        "includeTextOpacity",
        "enableContainers",
        "includeContainerType",
        "includeContainerSize",
        "includeChildrenCount",
        "includeContainerOpacity",
        "useFirstTextContent",
        "useAutoLayoutNames",
        "enableFigures",
        "includeShapeType",
        "includeShapeSize",
        "includeFillColor",
        "includeStrokeSettings",
        "includeCornerRadius",
        "includeFigureOpacity",
    ];

    /// Every switch turned off. Handy as a base for selective tests and
    /// `--set` overrides.
    #[must_use]
    pub const fn all_disabled() -> Self {
        Self {
            enable_text_layers: false,
            use_text_content: false,
            include_text_color: false,
            include_text_style: false,
            include_text_opacity: false,

            enable_containers: false,
            include_container_type: false,
            include_container_size: false,
            include_children_count: false,
            include_container_opacity: false,
            use_first_text_content: false,
            use_auto_layout_names: false,

            enable_figures: false,
            include_shape_type: false,
            include_shape_size: false,
            include_fill_color: false,
            include_stroke_settings: false,
            include_corner_radius: false,
            include_figure_opacity: false,
        }
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut bool> {
        let slot = match name {
            "enableTextLayers" => &mut self.enable_text_layers,
            "useTextContent" => &mut self.use_text_content,
            "includeTextColor" => &mut self.include_text_color,
            "includeTextStyle" => &mut self.include_text_style,
            "includeTextOpacity" => &mut self.include_text_opacity,
            "enableContainers" => &mut self.enable_containers,
            "includeContainerType" => &mut self.include_container_type,
            "includeContainerSize" => &mut self.include_container_size,
            "includeChildrenCount" => &mut self.include_children_count,
            "includeContainerOpacity" => &mut self.include_container_opacity,
            "useFirstTextContent" => &mut self.use_first_text_content,
            "useAutoLayoutNames" => &mut self.use_auto_layout_names,
            "enableFigures" => &mut self.enable_figures,
            "includeShapeType" => &mut self.include_shape_type,
            "includeShapeSize" => &mut self.include_shape_size,
            "includeFillColor" => &mut self.include_fill_color,
            "includeStrokeSettings" => &mut self.include_stroke_settings,
            "includeCornerRadius" => &mut self.include_corner_radius,
            "includeFigureOpacity" => &mut self.include_figure_opacity,
            _ => return None,
        };
        Some(slot)
    }

    /// Read a flag by its camelCase name.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        let mut copy = *self;
        copy.slot_mut(name).map(|slot| *slot)
    }

    /// Set a flag by its camelCase name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownFlag`] if `name` is not one of
    /// [`Settings::FLAG_NAMES`].
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), CoreError> {
        let slot = self
            .slot_mut(name)
            .ok_or_else(|| CoreError::UnknownFlag(name.to_string()))?;
        *slot = value;
        Ok(())
    }

    /// All flags as ordered `(name, value)` pairs.
    #[must_use]
    pub fn flags(&self) -> Vec<(&'static str, bool)> {
        Self::FLAG_NAMES
            .iter()
            .map(|name| (*name, self.flag(name).unwrap_or(true)))
            .collect()
    }
}
