//! Treeviz formatter for parsed coordinate systems
//!
//! One line per node, with box-drawing connectors for the nesting. Each line holds the node's
//! keyword, its name, and its scalar fields in parentheses:
//!
//! ```text
//! └─ VERT_CS: Newlyn
//!   ├─ UNIT: metre (conversion_factor=1.0)
//!   │ └─ AUTHORITY: EPSG (code=9001)
//!   └─ AUTHORITY: EPSG (code=5701)
//! ```
//!
//! The walk runs over the exported mapping, so the tree shows exactly the fields the exporter
//! emits. Child nodes are listed in field-name order with the node's own AUTHORITY last.

use super::export::export;
use crate::ast::CoordinateSystem;
use serde_json::{Map, Value};

/// Labels longer than this are cut and marked with an ellipsis
const MAX_LABEL_CHARS: usize = 60;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(cs: &CoordinateSystem) -> String {
    let mut result = String::new();
    append_node(&mut result, &export(cs), "", true);
    result
}

fn append_node(result: &mut String, node: &Value, prefix: &str, is_last: bool) {
    let Some((kind, fields)) = single_entry(node) else {
        return;
    };

    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        truncate(&label(kind, fields), MAX_LABEL_CHARS)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = child_nodes(fields);
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, &new_prefix, i == children.len() - 1);
    }
}

/// `{"KIND": {fields}}` split into its parts
fn single_entry(node: &Value) -> Option<(&str, &Map<String, Value>)> {
    let object = node.as_object()?;
    let (kind, fields) = object.iter().next()?;
    Some((kind.as_str(), fields.as_object()?))
}

fn label(kind: &str, fields: &Map<String, Value>) -> String {
    let mut label = kind.to_string();
    if let Some(name) = fields.get("name").and_then(Value::as_str) {
        label.push_str(": ");
        label.push_str(name);
    }

    let scalars: Vec<String> = fields
        .iter()
        .filter(|(key, _)| key.as_str() != "name")
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some(format!("{key}={s}")),
            Value::Number(n) => Some(format!("{key}={n}")),
            _ => None,
        })
        .collect();
    if !scalars.is_empty() {
        label.push_str(&format!(" ({})", scalars.join(", ")));
    }
    label
}

fn child_nodes(fields: &Map<String, Value>) -> Vec<&Value> {
    let mut children = Vec::new();
    for (key, value) in fields {
        if key == "authority" {
            continue;
        }
        match value {
            Value::Object(_) => children.push(value),
            Value::Array(items) => children.extend(items.iter()),
            _ => {}
        }
    }
    if let Some(authority) = fields.get("authority") {
        children.push(authority);
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Authority, Axis, AxisDirection, Unit, VerticalCs};

    #[test]
    fn test_vertical_cs_tree() {
        let cs = CoordinateSystem::Vertical(VerticalCs {
            name: "Newlyn".to_string(),
            vert_datum: None,
            linear_unit: Some(Unit {
                name: "metre".to_string(),
                conversion_factor: 1.0,
                authority: Some(Authority::new("EPSG", "9001")),
            }),
            axis_list: vec![Axis {
                name: "Up".to_string(),
                direction: AxisDirection::Up,
                authority: None,
            }],
            authority: Some(Authority::new("EPSG", "5701")),
        });

        let expected = "\
└─ VERT_CS: Newlyn
  ├─ AXIS: Up (direction=UP)
  ├─ UNIT: metre (conversion_factor=1.0)
  │ └─ AUTHORITY: EPSG (code=9001)
  └─ AUTHORITY: EPSG (code=5701)
";
        assert_eq!(to_treeviz_str(&cs), expected);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
