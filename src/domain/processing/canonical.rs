//! Canonical JSON serialization
//!
//! Produces a serialization with recursively sorted object keys, so that
//! identical logical content always yields identical bytes. The checksum
//! cache is keyed by a digest of this form; relying on `serde_json`'s own
//! map ordering would tie cache identity to a feature flag.

use serde_json::Value;

/// Serialize a JSON value with all object keys sorted
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(key, _)| key.as_str());

            out.push('{');

            for (i, (key, entry)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_value(entry, out);
            }

            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');

            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }

            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
