use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvPair<K, V> {
    pub key: K,
    pub value: V,
}

/// Entries of `obj` as key/value pairs, in map order.
pub fn obj_to_iterable(obj: &Map<String, Value>) -> Vec<KvPair<String, Value>> {
    obj.iter()
        .map(|(key, value)| KvPair {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

pub fn get_keys(obj: &Map<String, Value>) -> Vec<String> {
    obj.keys().cloned().collect()
}

pub fn get_keys_joined(obj: &Map<String, Value>) -> String {
    obj.keys().join(", ")
}

pub fn get_values(obj: &Map<String, Value>) -> Vec<Value> {
    obj.values().cloned().collect()
}

/// Values joined with `", "`; strings appear without quotes.
pub fn get_values_joined(obj: &Map<String, Value>) -> String {
    obj.values()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .join(", ")
}
