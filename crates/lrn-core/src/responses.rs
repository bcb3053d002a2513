//! Batch rename response types returned by `lrn-engine` and printed by
//! `lrn rename`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One name write, in traversal order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameChange {
    pub id: String,
    pub from: String,
    pub to: String,
}

/// A node the traversal could not process. Its subtree was skipped; its
/// siblings were not.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameFailure {
    pub id: String,
    pub name: String,
    pub reason: String,
}

/// User-facing result of a batch rename.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    EmptySelection,
    NoChanges,
    Renamed { count: usize },
}

impl RenameOutcome {
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::NoChanges
        } else {
            Self::Renamed { count }
        }
    }

    /// The notification shown to the user.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::EmptySelection => String::from("Please select at least one layer to rename."),
            Self::NoChanges => {
                String::from("No selected layers required renaming with the current settings.")
            }
            Self::Renamed { count } => {
                let noun = if count == 1 { "layer" } else { "layers" };
                format!("Renamed {count} {noun}.")
            }
        }
    }
}

/// Response from a batch rename (or a dry run of one).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenameReport {
    pub outcome: RenameOutcome,
    /// Selected roots whose name changed. Component-like roots never count.
    pub renamed_count: usize,
    pub changes: Vec<RenameChange>,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    #[must_use]
    pub const fn empty_selection() -> Self {
        Self {
            outcome: RenameOutcome::EmptySelection,
            renamed_count: 0,
            changes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_use_singular_for_one() {
        assert_eq!(RenameOutcome::from_count(1).message(), "Renamed 1 layer.");
        assert_eq!(RenameOutcome::from_count(2).message(), "Renamed 2 layers.");
        assert_eq!(RenameOutcome::from_count(0), RenameOutcome::NoChanges);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(RenameOutcome::Renamed { count: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "renamed", "count": 3}));
        let json = serde_json::to_value(RenameOutcome::EmptySelection).unwrap();
        assert_eq!(json, serde_json::json!({"status": "empty_selection"}));
    }
}
