use lrn_core::responses::RenameOutcome;
use lrn_core::{Node, Settings};
use lrn_engine::{NameEngine, StyleTable, rename_selection};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn selection(value: Value) -> Vec<Node> {
    serde_json::from_value(value).expect("selection decodes")
}

fn styles() -> StyleTable {
    [("S:body".to_string(), "Body/Regular".to_string())]
        .into_iter()
        .collect()
}

fn landing_card() -> Vec<Node> {
    selection(json!([
        {
            "id": "1:1", "name": "Frame 7", "type": "FRAME",
            "width": 360, "height": 240,
            "children": [
                {"id": "1:2", "name": "Text 1", "type": "TEXT",
                 "characters": "Start your free trial", "fontWeight": 700, "fontSize": 20},
                {"id": "1:3", "name": "Text 2", "type": "TEXT",
                 "characters": "No credit card required", "textStyleId": "S:body",
                 "fills": [{"type": "SOLID", "color": {"r": 0.4, "g": 0.4, "b": 0.4}}]},
                {"id": "1:4", "name": "Rectangle 3", "type": "RECTANGLE",
                 "width": 120, "height": 40, "cornerRadius": 6,
                 "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.5, "b": 1}}]}
            ]
        },
        {"id": "1:5", "name": "Ellipse 2", "type": "ELLIPSE", "width": 12, "height": 12}
    ]))
}

#[tokio::test]
async fn renames_a_realistic_selection() {
    let mut nodes = landing_card();
    let report = rename_selection(&mut nodes, &Settings::default(), &styles()).await;

    assert_eq!(
        nodes[0].name(),
        "\"Start your free trial\" - Frame - 360x240 - 3 elements"
    );
    let children = nodes[0].children().expect("frame children");
    assert_eq!(children[0].name(), "\"Start your free trial\"");
    assert_eq!(
        children[1].name(),
        "\"No credit card required\" - #666666 - Style: Body/Regular"
    );
    assert_eq!(
        children[2].name(),
        "Rectangle - 120x40 - #0080ff - Radius: 6px"
    );
    assert_eq!(nodes[1].name(), "Circle - 12x12");

    assert_eq!(report.renamed_count, 2);
    assert_eq!(report.outcome, RenameOutcome::Renamed { count: 2 });
    assert_eq!(report.outcome.message(), "Renamed 2 layers.");
    assert_eq!(report.changes.len(), 5);
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let mut nodes = landing_card();
    let styles = styles();
    let engine = NameEngine::with_styles(Settings::default(), &styles);

    let first = engine.rename_selection(&mut nodes).await;
    assert_eq!(first.renamed_count, 2);

    let second = engine.rename_selection(&mut nodes).await;
    assert_eq!(second.renamed_count, 0);
    assert!(second.changes.is_empty());
    assert_eq!(second.outcome, RenameOutcome::NoChanges);
    assert_eq!(
        second.outcome.message(),
        "No selected layers required renaming with the current settings."
    );
}

#[tokio::test]
async fn class_fallbacks_are_never_empty() {
    let nodes = selection(json!([
        {"id": "t", "name": "t", "type": "TEXT", "characters": "Hello", "opacity": 0.5},
        {"id": "s", "name": "s", "type": "RECTANGLE", "width": 5, "height": 5},
        {"id": "f", "name": "f", "type": "FRAME", "children": [
            {"id": "x", "name": "x", "type": "TEXT", "characters": "Inside"}
        ]},
        {"id": "g", "name": "g", "type": "GROUP"}
    ]));
    let engine = NameEngine::new(Settings {
        enable_text_layers: true,
        enable_figures: true,
        enable_containers: true,
        ..Settings::all_disabled()
    });

    let mut names = Vec::new();
    for node in &nodes {
        names.push(engine.generate_name(node).await);
    }
    assert_eq!(names, ["Text", "Shape", "Frame", "Group"]);
}

#[tokio::test]
async fn full_shape_composition() {
    let nodes = selection(json!([{
        "id": "r", "name": "Rectangle 1", "type": "RECTANGLE",
        "width": 200, "height": 100,
        "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.5, "b": 1}}],
        "strokes": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}],
        "strokeWeight": 2,
        "cornerRadius": 8,
        "opacity": 0.9
    }]));
    let name = NameEngine::new(Settings::default())
        .generate_name(&nodes[0])
        .await;
    assert_eq!(
        name,
        "Rectangle - 200x100 - #0080ff - Stroke: #ff0000 2px - Radius: 8px - Opacity: 90%"
    );
}

#[tokio::test]
async fn component_keeps_its_name_while_children_are_renamed() {
    let mut nodes = selection(json!([{
        "id": "c", "name": "Primary button", "type": "COMPONENT",
        "children": [{"id": "r", "name": "Rectangle 2", "type": "RECTANGLE", "width": 96, "height": 32}]
    }]));
    let report = rename_selection(&mut nodes, &Settings::default(), &StyleTable::default()).await;

    assert_eq!(nodes[0].name(), "Primary button");
    assert_eq!(nodes[0].children().expect("children")[0].name(), "Rectangle - 96x32");
    assert_eq!(report.renamed_count, 0);
}

#[tokio::test]
async fn empty_selection_reports_without_mutation() {
    let mut nodes: Vec<Node> = Vec::new();
    let report = rename_selection(&mut nodes, &Settings::default(), &StyleTable::default()).await;

    assert_eq!(report.outcome, RenameOutcome::EmptySelection);
    assert_eq!(report.renamed_count, 0);
    assert_eq!(
        report.outcome.message(),
        "Please select at least one layer to rename."
    );
}

#[tokio::test]
async fn corrupt_root_is_isolated_from_the_rest_of_the_selection() {
    let mut nodes = selection(json!([
        {"id": "g", "name": "Group 4", "type": "GROUP", "children": "oops"},
        {"id": "p", "name": "Polygon 1", "type": "POLYGON", "width": 30, "height": 26}
    ]));
    let report = rename_selection(&mut nodes, &Settings::default(), &StyleTable::default()).await;

    assert_eq!(nodes[0].name(), "Group 4");
    assert_eq!(nodes[1].name(), "Polygon - 30x26");
    assert_eq!(report.renamed_count, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, "g");
    assert_eq!(report.failures[0].name, "Group 4");
}

#[tokio::test]
async fn missing_fields_degrade_deterministically() {
    let nodes = selection(json!([
        {"id": "t", "name": "Text 9", "type": "TEXT", "characters": null, "fills": []}
    ]));
    let engine = NameEngine::new(Settings::default());

    let first = engine.preview_selection(&nodes).await;
    let second = engine.preview_selection(&nodes).await;
    assert_eq!(first, second);
    assert_eq!(first.changes[0].to, "Text");
}

#[tokio::test]
async fn wrong_typed_attributes_do_not_stop_the_walk() {
    let mut nodes = selection(json!([
        {"id": "f", "name": "Frame 2", "type": "FRAME", "width": "auto", "height": 80,
         "children": [
             {"id": "r", "name": "Rectangle 5", "type": "RECTANGLE", "width": 10, "height": 10}
         ]},
        {"id": "t", "name": "Text 1", "type": "TEXT", "characters": "Hi", "opacity": "0.5"}
    ]));
    let report = rename_selection(&mut nodes, &Settings::default(), &StyleTable::default()).await;

    assert_eq!(nodes[0].name(), "Frame - 1 element");
    assert_eq!(nodes[0].children().expect("frame children")[0].name(), "Rectangle - 10x10");
    assert_eq!(nodes[1].name(), "\"Hi\"");
    assert!(report.failures.is_empty());
    assert_eq!(report.renamed_count, 2);
    assert_eq!(report.changes.len(), 3);
}
