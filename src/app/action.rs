//! Actions for the session store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::mvi::Action;

pub const FOO: &str = "FOO";
pub const CHANGE_STORE_VALUE: &str = "CHANGE_STORE_VALUE";

/// Actions that can be dispatched to the session store.
///
/// The wire form is a JSON object with a `type` discriminator. Decoding
/// never fails: anything that is not a well-formed known action becomes
/// `Unrecognized`, which the reducer treats as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// `{ "type": "FOO", "payload": "<value>" }`
    Foo { payload: String },

    /// `{ "type": "CHANGE_STORE_VALUE", "storeValue": "<value>" }`
    ChangeStoreValue { store_value: String },

    /// Unknown or malformed action. `kind` keeps the `type` string if one
    /// was present.
    Unrecognized { kind: Option<String> },
}

impl Action for AppAction {}

impl AppAction {
    pub fn foo(payload: impl Into<String>) -> Self {
        Self::Foo {
            payload: payload.into(),
        }
    }

    pub fn change_store_value(store_value: impl Into<String>) -> Self {
        Self::ChangeStoreValue {
            store_value: store_value.into(),
        }
    }

    pub fn unrecognized(kind: impl Into<String>) -> Self {
        Self::Unrecognized {
            kind: Some(kind.into()),
        }
    }

    /// The `type` discriminator, if any.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Foo { .. } => Some(FOO),
            Self::ChangeStoreValue { .. } => Some(CHANGE_STORE_VALUE),
            Self::Unrecognized { kind } => kind.as_deref(),
        }
    }

    /// Classify an arbitrary JSON value as an action.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Unrecognized { kind: None };
        };

        let text = |field: &str| object.get(field).and_then(Value::as_str).map(str::to_owned);
        let kind = object.get("type").and_then(Value::as_str);

        match kind {
            Some(FOO) => match text("payload") {
                Some(payload) => Self::Foo { payload },
                None => Self::unrecognized(FOO),
            },
            Some(CHANGE_STORE_VALUE) => match text("storeValue") {
                Some(store_value) => Self::ChangeStoreValue { store_value },
                None => Self::unrecognized(CHANGE_STORE_VALUE),
            },
            other => Self::Unrecognized {
                kind: other.map(str::to_owned),
            },
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Foo { payload } => json!({ "type": FOO, "payload": payload }),
            Self::ChangeStoreValue { store_value } => {
                json!({ "type": CHANGE_STORE_VALUE, "storeValue": store_value })
            }
            Self::Unrecognized { kind: Some(kind) } => json!({ "type": kind }),
            Self::Unrecognized { kind: None } => Value::Object(Map::new()),
        }
    }
}

impl Serialize for AppAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AppAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
