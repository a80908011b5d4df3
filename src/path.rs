//! Dot-delimited path lookup into JSON values.

use serde_json::Value;

/// Resolve a dot-delimited key path (e.g. `"body.title"`) against a value.
///
/// Descends one segment at a time. If any intermediate value is not an
/// object, or a segment is absent, the result is `None`. Never panics,
/// including on primitive roots and empty paths.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
