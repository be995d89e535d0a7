//! Snapshot capture and the keyed stash used for rehydration.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::app::AppState;

/// Errors that can occur when capturing or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Snapshot is not a JSON object")]
    NotAnObject,

    #[error("No snapshot stashed under '{key}'")]
    Missing { key: String },
}

/// Serialized state, as handed from a server session to a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn capture(state: &AppState) -> Result<Self, SnapshotError> {
        serde_json::to_string(state)
            .map(Self)
            .map_err(SnapshotError::Encode)
    }

    pub fn from_json(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the snapshot back into state. Extra fields are kept.
    pub fn restore(&self) -> Result<AppState, SnapshotError> {
        let value: Value = serde_json::from_str(&self.0).map_err(SnapshotError::Parse)?;
        if !value.is_object() {
            return Err(SnapshotError::NotAnObject);
        }
        serde_json::from_value(value).map_err(SnapshotError::Parse)
    }
}

/// Keyed snapshot storage shared between sessions.
///
/// Cloning shares the underlying map. Sessions only touch it when they
/// start (rehydrate) or finish (capture).
#[derive(Debug, Clone, Default)]
pub struct SnapshotStash {
    inner: Arc<RwLock<HashMap<String, Snapshot>>>,
}

impl SnapshotStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `snapshot` under `key`, replacing any previous one.
    pub fn stash(&self, key: &str, snapshot: Snapshot) {
        self.inner.write().insert(key.to_string(), snapshot);
    }

    pub fn get(&self, key: &str) -> Option<Snapshot> {
        self.inner.read().get(key).cloned()
    }

    pub fn take(&self, key: &str) -> Option<Snapshot> {
        self.inner.write().remove(key)
    }

    /// Restore the state stashed under `key`.
    pub fn restore(&self, key: &str) -> Result<AppState, SnapshotError> {
        self.get(key)
            .ok_or_else(|| SnapshotError::Missing {
                key: key.to_string(),
            })?
            .restore()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capture_restore_keeps_extra_fields() {
        let state = AppState::new("x").with("other", json!({ "nested": [1, 2] }));
        let snapshot = Snapshot::capture(&state).unwrap();
        assert_eq!(snapshot.restore().unwrap(), state);
    }

    #[test]
    fn restore_rejects_non_object() {
        let err = Snapshot::from_json("[1, 2]").restore().unwrap_err();
        assert!(matches!(err, SnapshotError::NotAnObject));
    }

    #[test]
    fn restore_rejects_invalid_json() {
        let err = Snapshot::from_json("{ nope").restore().unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn restore_rejects_non_string_foo() {
        let err = Snapshot::from_json(r#"{ "foo": 3 }"#).restore().unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn stash_is_shared_between_clones() {
        let stash = SnapshotStash::new();
        let other = stash.clone();
        stash.stash("k", Snapshot::capture(&AppState::new("v")).unwrap());

        assert_eq!(other.len(), 1);
        assert_eq!(other.restore("k").unwrap().foo, "v");
        assert!(other.take("k").is_some());
        assert!(stash.is_empty());
    }

    #[test]
    fn missing_key_reports_key() {
        let err = SnapshotStash::new().restore("absent").unwrap_err();
        assert_eq!(err.to_string(), "No snapshot stashed under 'absent'");
    }
}
