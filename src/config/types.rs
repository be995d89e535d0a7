use serde::{Deserialize, Serialize};

use crate::app::AppAction;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

/// Settings applied to every session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Attach the dispatch logger to every store (default: false).
    #[serde(default)]
    pub debug: bool,
    /// Key under which server sessions stash their final snapshot
    /// (default: "__PAGESTORE__").
    #[serde(default = "default_store_key")]
    pub store_key: String,
}

/// Action dispatched to a fresh store before any page logic runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Dispatch the bootstrap action at all (default: true).
    #[serde(default = "default_bootstrap_enabled")]
    pub enabled: bool,
    /// The action itself (default: `{ type = "FOO", payload = "foo" }`).
    #[serde(default = "default_bootstrap_action")]
    pub action: AppAction,
}

impl BootstrapConfig {
    /// The action to dispatch, or `None` when bootstrapping is disabled.
    pub fn action(&self) -> Option<AppAction> {
        self.enabled.then(|| self.action.clone())
    }
}

fn default_store_key() -> String {
    "__PAGESTORE__".to_string()
}

fn default_bootstrap_enabled() -> bool {
    true
}

fn default_bootstrap_action() -> AppAction {
    AppAction::foo("foo")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            debug: false,
            store_key: default_store_key(),
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: default_bootstrap_enabled(),
            action: default_bootstrap_action(),
        }
    }
}
