use crate::app::{AppReducer, AppState};
use crate::config::Config;
use crate::store::{DispatchLogger, Store};

/// Options passed to the store factory for each session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Session runs on the server side; its final state is stashed for
    /// the client to rehydrate from.
    pub is_server: bool,
    /// Attach the dispatch logger.
    pub debug: bool,
    /// Stash key for this session's snapshot.
    pub store_key: String,
}

impl StoreOptions {
    pub fn server(store_key: impl Into<String>) -> Self {
        Self {
            is_server: true,
            debug: false,
            store_key: store_key.into(),
        }
    }

    pub fn client(store_key: impl Into<String>) -> Self {
        Self {
            is_server: false,
            ..Self::server(store_key)
        }
    }

    pub fn from_config(config: &Config, is_server: bool) -> Self {
        Self {
            is_server,
            debug: config.debug_enabled(),
            store_key: config.store.store_key.clone(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Builds the store for a new session.
///
/// Implemented for any `Fn(Option<AppState>, &StoreOptions) -> Store<AppReducer>`,
/// so a host can swap in its own construction (for example to seed a
/// captured server state).
pub trait StoreFactory {
    fn create(&self, initial: Option<AppState>, options: &StoreOptions) -> Store<AppReducer>;
}

impl<F> StoreFactory for F
where
    F: Fn(Option<AppState>, &StoreOptions) -> Store<AppReducer>,
{
    fn create(&self, initial: Option<AppState>, options: &StoreOptions) -> Store<AppReducer> {
        self(initial, options)
    }
}

/// Default factory: starts from `initial` (or `{ foo: "" }`) and attaches
/// the dispatch logger when `options.debug` is set.
pub fn make_store(initial: Option<AppState>, options: &StoreOptions) -> Store<AppReducer> {
    let mut store = Store::new(initial.unwrap_or_default());
    if options.debug {
        store.subscribe(DispatchLogger);
    }
    store
}
