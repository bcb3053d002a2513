//! Paints and colors.
//!
//! Only visible solid paints carry naming information. Every other paint kind
//! (gradients, images, video) decodes to [`Paint::Unsupported`] instead of
//! failing, so a node with exotic fills still decodes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An RGB color with channels nominally in `0.0..=1.0`.
///
/// Channels are not clamped; out-of-range values are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

const fn visible_default() -> bool {
    true
}

/// A solid paint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SolidPaint {
    pub color: Rgb,
    #[serde(default = "visible_default")]
    pub visible: bool,
}

/// A single fill or stroke entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(SolidPaint),
    /// Any paint that does not contribute to naming. Keeps the host tag.
    Unsupported { paint_type: String },
}

impl Paint {
    #[must_use]
    pub const fn solid(color: Rgb) -> Self {
        Self::Solid(SolidPaint {
            color,
            visible: true,
        })
    }

    /// The color of a visible solid paint.
    #[must_use]
    pub const fn visible_solid_color(&self) -> Option<Rgb> {
        match self {
            Self::Solid(paint) if paint.visible => Some(paint.color),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let paint_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if paint_type == "SOLID"
            && let Ok(solid) = serde_json::from_value::<SolidPaint>(value)
        {
            return Ok(Self::Solid(solid));
        }

        Ok(Self::Unsupported { paint_type })
    }
}
