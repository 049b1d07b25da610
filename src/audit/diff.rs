//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values
//! for audit log entries.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
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
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields() {
        let before = json!({"category": "Food", "amount": "12.50"});
        let after = json!({"category": "Food", "amount": "15.00"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: \"12.50\" -> \"15.00\"");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"description": "Lunch"});
        let after = json!({"category": "Food"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("description: \"Lunch\" -> (removed)"));
        assert!(diff.contains("category: (added) -> \"Food\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"category": "Food"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_long_strings_truncated() {
        let before = json!({"description": "a".repeat(80)});
        let after = json!({"description": "b"});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\" -> \"b\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
    }
}
