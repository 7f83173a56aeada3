
use serde_json::Value;

use crate::Element;

/// Structural equality between a parsed tree and a `serde_json` value.
///
/// Numbers are compared by their text, so `value` must come from
/// `serde_json`'s own serialization of the document that was parsed.
pub(crate) fn same(element: &Element, value: &Value) -> bool {
    match value {
        Value::Null => element.is_null(),
        Value::Bool(b) => element.as_bool() == Some(*b),
        Value::Number(n) => element.as_number() == Some(n.to_string().as_str()),
        Value::String(s) => element.as_str() == Some(s.as_str()),
        Value::Array(items) => element.as_array().is_some_and(|elements| {
            elements.len() == items.len()
                && elements.iter().zip(items).all(|(e, v)| same(e, v))
        }),
        Value::Object(map) => element.as_object().is_some_and(|members| {
            members.len() == map.len()
                && map
                    .iter()
                    .all(|(k, v)| members.get(k).is_some_and(|e| same(e, v)))
        }),
    }
}
