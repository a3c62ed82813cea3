//! JSON key/value to XLIFF 1.2 conversion.
//!
//! See <https://docs.oasis-open.org/xliff/v1.2/os/xliff-core.html>. Input is
//! a string-keyed map whose values are strings or nested string maps (one
//! level); the output is a single concatenated document string with no
//! formatting guarantees beyond well-formedness.

use serde_json::{Map, Value};

use crate::translation::Translation;

const VERSION: &str = "1.2";
const XMLNS: &str = "urn:oasis:names:tc:xliff:document:1.2";
const DATATYPE: &str = "plaintext";
const FALLBACK_ORIGINAL: &str = "translation.xliff";

/// Builds an XLIFF 1.2 document from a key/value map.
///
/// Top-level string values become one `trans-unit` each, with the key as both
/// `id` and `source` and the value as `target`. Values that are maps recurse
/// exactly one level, emitting a `trans-unit` per nested string entry. Any
/// other value is silently skipped. The translation supplies the file
/// attributes (`source-language`, `target-language`, `original`).
pub fn document(values: &Map<String, Value>, translation: &Translation) -> String {
    let mut units = String::new();
    for (key, value) in values {
        match value {
            Value::String(text) => units.push_str(&trans_unit(key, text)),
            Value::Object(nested) => {
                for (nested_key, nested_value) in nested {
                    if let Value::String(text) = nested_value {
                        units.push_str(&trans_unit(nested_key, text));
                    }
                }
            }
            _ => {}
        }
    }

    let original = if translation.filename.is_empty() {
        FALLBACK_ORIGINAL
    } else {
        translation.filename.as_str()
    };

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <xliff version=\"{VERSION}\" xmlns=\"{XMLNS}\">\
         <file source-language=\"{}\" target-language=\"{}\" datatype=\"{DATATYPE}\" original=\"{}\">\
         <body>{units}</body></file></xliff>",
        escape(&translation.source_language),
        escape(&translation.language_code),
        escape(original),
    )
}

fn trans_unit(id: &str, target: &str) -> String {
    let id = escape(id);
    let target = escape(target);
    format!("<trans-unit id=\"{id}\"><source>{id}</source><target>{target}</target></trans-unit>")
}

/// Escapes the five XML special characters for use in attribute values and
/// element content.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
