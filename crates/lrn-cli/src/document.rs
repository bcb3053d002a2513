//! Document files: an exported selection plus its text-style table.
//!
//! ```json
//! { "styles": { "S:1": "Heading/H1" }, "selection": [ { "id": "1:2", ... } ] }
//! ```
//!
//! Renaming writes back into the original JSON, touching only `name` fields,
//! so attributes the node model does not know about survive unchanged.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, bail};
use lrn_core::Node;
use lrn_core::responses::RenameChange;
use lrn_engine::StyleTable;
use schemars::JsonSchema;
use serde_json::{Map, Value};

const STYLES_KEY: &str = "styles";
const SELECTION_KEY: &str = "selection";

#[derive(Debug)]
pub struct Document {
    raw: Value,
    pub styles: StyleTable,
    pub selection: Vec<Node>,
}

impl Document {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?;
        let raw: Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        Self::from_value(raw).with_context(|| format!("invalid document {}", path.display()))
    }

    pub fn from_value(raw: Value) -> anyhow::Result<Self> {
        let Some(selection) = raw.get(SELECTION_KEY).and_then(Value::as_array) else {
            bail!("document has no \"{SELECTION_KEY}\" array");
        };
        let selection = selection.iter().cloned().map(Node::from_value).collect();

        let styles = match raw.get(STYLES_KEY) {
            None | Some(Value::Null) => StyleTable::default(),
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(id, name)| Some((id.clone(), name.as_str()?.to_string())))
                .collect(),
            Some(other) => {
                tracing::warn!(found = %other, "ignoring non-object \"styles\"");
                StyleTable::default()
            }
        };

        Ok(Self {
            raw,
            styles,
            selection,
        })
    }

    /// Patch `name` fields in the original JSON by node id. Returns the
    /// number of fields written.
    pub fn apply_changes(&mut self, changes: &[RenameChange]) -> usize {
        let names: HashMap<&str, &str> = changes
            .iter()
            .map(|change| (change.id.as_str(), change.to.as_str()))
            .collect();

        let mut patched = 0;
        if let Some(Value::Array(roots)) = self.raw.get_mut(SELECTION_KEY) {
            for root in roots {
                patch_names(root, &names, &mut patched);
            }
        }
        patched
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let mut json = serde_json::to_string_pretty(&self.raw)?;
        json.push('\n');
        std::fs::write(path, json)
            .with_context(|| format!("failed to write document {}", path.display()))
    }

    #[cfg(test)]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

fn patch_names(value: &mut Value, names: &HashMap<&str, &str>, patched: &mut usize) {
    let Value::Object(node) = value else {
        return;
    };

    let new_name = node.get("id").and_then(Value::as_str).and_then(|id| names.get(id));
    if let Some(name) = new_name {
        node.insert(String::from("name"), Value::String((*name).to_string()));
        *patched += 1;
    }

    if let Some(Value::Array(children)) = node.get_mut("children") {
        for child in children {
            patch_names(child, names, patched);
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Shape of a document file, for `lrn schema document`.
#[derive(JsonSchema)]
#[allow(dead_code)]
pub struct DocumentSchema {
    /// Text style id to display name.
    #[serde(default)]
    styles: BTreeMap<String, String>,
    /// The selected root nodes.
    selection: Vec<NodeSchema>,
}

/// A host node. Attributes beyond these keys are read per node type
/// (`characters`, `fills`, `strokes`, `cornerRadius`, `width`, ...).
#[derive(JsonSchema)]
#[allow(dead_code)]
pub struct NodeSchema {
    id: String,
    name: String,
    /// Host type tag, e.g. `TEXT`, `RECTANGLE`, `FRAME`, `INSTANCE`.
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    children: Vec<Self>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "styles": {"S:1": "Heading/H1", "S:bad": 7},
            "selection": [{
                "id": "1:1", "name": "Frame 1", "type": "FRAME",
                "layoutMode": "VERTICAL",
                "children": [
                    {"id": "1:2", "name": "Text 1", "type": "TEXT", "characters": "Hi", "textStyleId": "S:1"}
                ]
            }]
        })
    }

    #[test]
    fn decodes_selection_and_string_styles() {
        let document = Document::from_value(sample()).expect("document");
        assert_eq!(document.selection.len(), 1);
        assert_eq!(document.styles.len(), 1);
    }

    #[test]
    fn missing_selection_is_an_error() {
        assert!(Document::from_value(json!({"styles": {}})).is_err());
        assert!(Document::from_value(json!({"selection": {}})).is_err());
    }

    #[test]
    fn patches_only_names_by_id() {
        let mut document = Document::from_value(sample()).expect("document");
        let patched = document.apply_changes(&[RenameChange {
            id: "1:2".into(),
            from: "Text 1".into(),
            to: "\"Hi\" - Style: Heading/H1".into(),
        }]);

        assert_eq!(patched, 1);
        let mut expected = sample();
        expected["selection"][0]["children"][0]["name"] = json!("\"Hi\" - Style: Heading/H1");
        assert_eq!(document.raw(), &expected);
    }

    #[test]
    fn write_round_trips_through_read() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("doc.json");
        let document = Document::from_value(sample()).expect("document");
        document.write(&path).expect("write");

        let reread = Document::read(&path).expect("read");
        assert_eq!(reread.raw(), &sample());
    }
}
