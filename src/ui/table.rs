//! Plain-text result table

use serde_json::Value;

use crate::api::Row;

/// Render rows as an aligned text table. Columns follow the key order of
/// the first row.
pub fn render_table(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return "(no rows)".to_string();
    };

    let columns: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let rendered: Vec<String> = columns
            .iter()
            .map(|column| cell_text(row.get(*column)))
            .collect();
        for (i, cell) in rendered.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
        cells.push(rendered);
    }

    let mut out = String::new();

    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        push_cell(&mut out, column, widths[i], i + 1 == columns.len());
    }
    out.push('\n');
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("-+-");
        }
        out.push_str(&"-".repeat(*width));
    }

    for row in &cells {
        out.push('\n');
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            push_cell(&mut out, cell, widths[i], i + 1 == row.len());
        }
    }

    out
}

fn push_cell(out: &mut String, text: &str, width: usize, last: bool) {
    if last {
        // No trailing padding on the last column
        out.push_str(text);
    } else {
        out.push_str(&format!("{text:<width$}"));
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
