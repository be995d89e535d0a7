use std::collections::BTreeMap;

use crate::app::{AppAction, AppReducer, AppState};
use crate::store::{Dispatch, Store};

/// Rendered page output, one line per element.
pub type View = Vec<String>;

/// What the host knows about the page being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub pathname: String,
    pub query: BTreeMap<String, String>,
}

impl PageRequest {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// Access a page gets while computing its initial props: read and
/// dispatch through the session's store, plus request details.
pub struct PageContext<'a> {
    store: &'a mut Store<AppReducer>,
    request: &'a PageRequest,
    is_server: bool,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        store: &'a mut Store<AppReducer>,
        request: &'a PageRequest,
        is_server: bool,
    ) -> Self {
        Self {
            store,
            request,
            is_server,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn request(&self) -> &PageRequest {
        self.request
    }

    pub fn is_server(&self) -> bool {
        self.is_server
    }
}

impl Dispatch<AppAction> for PageContext<'_> {
    fn dispatch(&mut self, action: AppAction) {
        self.store.dispatch(action);
    }
}

/// A page: loads props once per session, then renders from props and
/// the current state.
pub trait Page {
    type Props;

    fn initial_props(&self, ctx: &mut PageContext<'_>) -> Self::Props;

    fn render(&self, props: &Self::Props, state: &AppState) -> View;
}
