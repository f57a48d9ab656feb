//! Change summaries for audit records
//!
//! Compares the JSON snapshots of an entity before and after a mutation and
//! describes the top-level fields that changed.

use serde_json::Value;

/// Describe the top-level differences between two snapshots
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
