//! Terminal rendering
//!
//! Pure text rendering over the state types; no widget state lives here.

pub mod table;

pub use table::render_table;

use std::collections::BTreeMap;

use crate::session::{Decision, Message, Role};

/// Render one transcript entry with its role marker and, for proposals,
/// the statement and its approval tag.
pub fn render_message(message: &Message) -> String {
    let mut out = match message.role {
        Role::User => format!("you> {}", message.content),
        Role::Assistant => format!("assistant> {}", message.content),
        Role::Error => format!("error> {}", message.content),
    };

    if let Some(query) = &message.query {
        out.push_str("\n    ");
        out.push_str(query);
        if let Some(decision) = message.decision {
            let tag = match decision {
                Decision::Pending => "[pending approval]",
                Decision::Approved => "[approved]",
                Decision::Rejected => "[rejected]",
            };
            out.push_str("\n    ");
            out.push_str(tag);
        }
    }

    out
}

/// Render the schema mapping and dialect reported by the backend.
pub fn render_schema(schema: &BTreeMap<String, Vec<String>>, dialect: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(dialect) = dialect {
        out.push_str(&format!("dialect: {dialect}\n"));
    }

    if schema.is_empty() {
        out.push_str("(no tables)");
        return out;
    }

    for (table, columns) in schema {
        out.push_str(&format!("{table}: {}\n", columns.join(", ")));
    }

    out.trim_end().to_string()
}
