//! Number formatting and fragment joining shared by every composer.
//!
//! Rounding follows the host scripting convention: halves round toward
//! positive infinity (`2.5 → 3`, `-2.5 → -2`), and values are never clamped.

/// Separator between name fragments.
pub const SEPARATOR: &str = " - ";

/// Maximum number of characters of text content kept in a name.
pub const MAX_TEXT_CHARS: usize = 30;

/// Round half toward positive infinity. `-0` normalizes to `0`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}

/// Render an already-rounded number the way the host prints it.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        format!("{}", value + 0.0)
    }
}

/// `round(value)` rendered as text.
#[must_use]
pub fn format_rounded(value: f64) -> String {
    format_number(round_half_up(value))
}

/// `"{w}x{h}"`, or nothing if either side is unknown.
#[must_use]
pub fn format_dimensions(width: Option<f64>, height: Option<f64>) -> Option<String> {
    let (width, height) = width.zip(height)?;
    Some(format!(
        "{}x{}",
        format_rounded(width),
        format_rounded(height)
    ))
}

/// `"Opacity: N%"` for any opacity below 1. Fully opaque emits nothing.
#[must_use]
pub fn format_opacity(opacity: f64) -> Option<String> {
    (opacity < 1.0).then(|| format!("Opacity: {}%", format_rounded(opacity * 100.0)))
}

/// Keep at most [`MAX_TEXT_CHARS`] characters, marking the cut with `...`.
#[must_use]
pub fn truncate_text(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_CHARS {
        let mut out: String = text.chars().take(MAX_TEXT_CHARS).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

/// Wrap text content in quotes after truncation.
#[must_use]
pub fn quote_text(text: &str) -> String {
    format!("\"{}\"", truncate_text(text))
}

/// Ordered list of optional name fragments.
#[derive(Debug, Default)]
pub struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a fragment; `None` and empty strings are dropped.
    pub fn push(&mut self, fragment: Option<String>) {
        if let Some(fragment) = fragment.filter(|part| !part.is_empty()) {
            self.parts.push(fragment);
        }
    }

    /// Join the fragments, or return `fallback` if there are none.
    #[must_use]
    pub fn finish(self, fallback: &str) -> String {
        if self.parts.is_empty() {
            fallback.to_string()
        } else {
            self.parts.join(SEPARATOR)
        }
    }
}
