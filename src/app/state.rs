//! State for the session store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mvi::StoreState;

/// Session state record.
///
/// `foo` is always present; every other attribute lives in `extra` and is
/// carried through transitions untouched. On the wire the extras are
/// flattened next to `foo`, so `{"foo": "x", "other": 1}` round-trips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub foo: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoreState for AppState {}

impl AppState {
    pub fn new(foo: impl Into<String>) -> Self {
        Self {
            foo: foo.into(),
            extra: Map::new(),
        }
    }

    /// Add an extra attribute. `foo` is reserved for the typed field and
    /// is ignored here.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "foo" {
            self.extra.insert(key, value.into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_has_empty_foo() {
        let state = AppState::default();
        assert_eq!(state.foo, "");
        assert!(state.extra.is_empty());
    }

    #[test]
    fn serializes_extras_flat() {
        let state = AppState::new("x").with("other", 1);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value, json!({ "foo": "x", "other": 1 }));
    }

    #[test]
    fn missing_foo_deserializes_to_empty() {
        let state: AppState = serde_json::from_value(json!({ "other": true })).unwrap();
        assert_eq!(state.foo, "");
        assert_eq!(state.get("other"), Some(&json!(true)));
    }

    #[test]
    fn with_ignores_reserved_key() {
        let state = AppState::new("x").with("foo", "y");
        assert_eq!(state.foo, "x");
        assert!(state.extra.is_empty());
    }
}
