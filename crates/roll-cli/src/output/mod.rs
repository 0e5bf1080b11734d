use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(&serde_json::to_value(value)?, options))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Lists become one row per item. Objects become a key/value table, and any
/// list of objects they hold (daily occurrences, per-class stats, monthly
/// subjects) is rendered as its own table underneath.
fn render_table(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => render_list(items, options),
        Value::Object(map) => {
            let mut fields = Vec::new();
            let mut sections = Vec::new();
            for (key, field) in map {
                match field {
                    Value::Array(items) if items.iter().all(Value::is_object) => {
                        sections.push(format!("{key}:\n{}", render_list(items, options)));
                    }
                    _ => flatten_into(key, field, &mut fields),
                }
            }

            let mut blocks = Vec::with_capacity(sections.len() + 1);
            if !fields.is_empty() {
                let rows = fields
                    .into_iter()
                    .map(|(key, cell)| vec![key, cell])
                    .collect::<Vec<_>>();
                blocks.push(table::render_rows(&["key", "value"], &rows, options));
            }
            blocks.extend(sections);
            blocks.join("\n\n")
        }
        scalar => table::render_rows(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn render_list(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options);
    }

    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(flatten_object)
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for row in &flattened {
        for (key, _) in row {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = flattened
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| {
                    row.iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, cell)| cell.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options)
}

fn flatten_object(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (key, value) in map {
        flatten_into(key, value, &mut out);
    }
    out
}

/// Nested objects become dotted columns, e.g. `projection.standing`.
fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{prefix}.{key}"), nested, out);
            }
        }
        other => out.push((prefix.to_string(), cell(other))),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_render_is_valid_json() {
        let value = json!({"id": "cls-1", "day_of_week": 1});
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "cls-1");
        assert_eq!(parsed["day_of_week"], 1);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = json!({"id": "att-1", "attended": true});
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn list_rows_flatten_nested_objects() {
        let value = json!([
            {"class_id": "cls-1", "projection": {"standing": "safe", "needed": 0}},
            {"class_id": "cls-2", "projection": {"standing": "critical", "needed": 4}},
        ]);
        let out = render_table(&value, PLAIN);
        let header = out.lines().next().expect("header line");
        assert!(header.contains("projection.standing"));
        assert!(header.contains("projection.needed"));
        assert!(out.contains("critical"));
    }

    #[test]
    fn object_with_nested_list_renders_section() {
        let value = json!({
            "date": "2024-01-15",
            "day_of_week": 1,
            "occurrences": [
                {"class": {"subject": "Physics"}, "attendance": null},
            ],
        });
        let out = render_table(&value, PLAIN);
        assert!(out.contains("2024-01-15"));
        assert!(out.contains("occurrences:"));
        assert!(out.contains("class.subject"));
        assert!(out.contains("Physics"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_table(&json!([]), PLAIN), "(no rows)");
    }
}
