//! Child-count wording.
//!
//! English keeps a two-way rule whose singular boundary is `n % 10 == 1`
//! excluding `n % 100 == 11` ("21 element", "11 elements"); existing layer
//! names depend on that exact boundary. Russian uses the full three-way rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used for count wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Russian => "russian",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn is_singular(count: usize) -> bool {
    count % 10 == 1 && count % 100 != 11
}

const fn is_paucal(count: usize) -> bool {
    matches!(count % 10, 2..=4) && !matches!(count % 100, 12..=14)
}

/// `"{n} element"` / `"{n} elements"` (or the locale's equivalent).
#[must_use]
pub fn elements_count_text(count: usize, locale: Locale) -> String {
    let noun = match locale {
        Locale::English if is_singular(count) => "element",
        Locale::English => "elements",
        Locale::Russian if is_singular(count) => "элемент",
        Locale::Russian if is_paucal(count) => "элемента",
        Locale::Russian => "элементов",
    };
    format!("{count} {noun}")
}
