// Tests for the terminal rendering helpers

use std::collections::BTreeMap;

use serde_json::json;

use dbpilot::api::Row;
use dbpilot::session::Message;
use dbpilot::ui::{render_message, render_schema, render_table};

fn rows(value: serde_json::Value) -> Vec<Row> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn table_columns_follow_first_row_order() {
    let rows = rows(json!([
        {"Name": "For Those About To Rock", "TrackId": 1},
        {"Name": "Balls to the Wall", "TrackId": 2},
    ]));

    let table = render_table(&rows);
    let mut lines = table.lines();

    // preserve_order keeps the backend's column order
    let header: Vec<&str> = lines.next().unwrap().split('|').map(str::trim).collect();
    assert_eq!(header, vec!["Name", "TrackId"]);
    assert!(lines.next().unwrap().starts_with("----"));
    assert_eq!(
        lines.next().unwrap(),
        "For Those About To Rock | 1"
    );
}

#[test]
fn table_renders_scalars_and_nulls() {
    let rows = rows(json!([
        {"id": 1, "name": "a", "price": 0.99, "note": null},
        {"id": 2, "name": "b", "price": 12.5, "note": "x"},
    ]));

    let table = render_table(&rows);
    assert!(table.contains("0.99"));
    assert!(table.contains("12.5"));
    // Strings render without quotes, nulls as blank cells
    assert!(!table.contains('"'));
}

#[test]
fn empty_result_set_has_a_placeholder() {
    assert_eq!(render_table(&[]), "(no rows)");
}

#[test]
fn message_rendering_tags_proposals() {
    let plain = Message::assistant("hello");
    assert_eq!(render_message(&plain), "assistant> hello");

    let user = Message::user("hi");
    assert_eq!(render_message(&user), "you> hi");

    let proposal = Message::proposal("Run this?", "SELECT 1");
    let rendered = render_message(&proposal);
    assert!(rendered.contains("SELECT 1"));
    assert!(rendered.contains("[pending approval]"));

    let failure = Message::error("server returned HTTP 500");
    assert!(render_message(&failure).starts_with("error> "));
}

#[test]
fn schema_rendering_lists_tables_and_dialect() {
    let mut schema = BTreeMap::new();
    schema.insert(
        "albums".to_string(),
        vec!["AlbumId".to_string(), "Title".to_string()],
    );
    schema.insert(
        "tracks".to_string(),
        vec!["TrackId".to_string(), "Name".to_string()],
    );

    let rendered = render_schema(&schema, Some("sqlite"));
    assert!(rendered.starts_with("dialect: sqlite"));
    assert!(rendered.contains("albums: AlbumId, Title"));
    assert!(rendered.contains("tracks: TrackId, Name"));

    let empty = render_schema(&BTreeMap::new(), None);
    assert_eq!(empty, "(no tables)");
}
