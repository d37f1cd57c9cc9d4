use serde_json::Value;

/// Follows a dot-separated `path` through objects and arrays (numeric
/// segments index arrays). Missing keys and null values yield `fallback`.
pub fn json_safe_get(json: &Value, path: &str, fallback: Value) -> Value {
    if !matches!(json, Value::Object(_) | Value::Array(_)) {
        tracing::warn!("Configuration is invalid or not loaded.");
        return fallback;
    }

    let mut current = json;
    for key in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return fallback,
        }
    }

    match current {
        Value::Null => fallback,
        value => value.clone(),
    }
}
