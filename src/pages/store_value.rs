use crate::app::{AppAction, AppState};
use crate::host::View;
use crate::store::Dispatch;

pub const BUTTON_LABEL: &str = "Redux Hook Store";
pub const NEW_STORE_VALUE: &str = "new store value";

/// Shows `foo` straight from the store and offers a button that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreValuePanel {
    store_value: String,
}

impl StoreValuePanel {
    /// Select the panel's data from session state.
    pub fn select(state: &AppState) -> Self {
        Self {
            store_value: state.foo.clone(),
        }
    }

    pub fn store_value(&self) -> &str {
        &self.store_value
    }

    /// Button handler.
    pub fn trigger_change(dispatch: &mut dyn Dispatch<AppAction>) {
        dispatch.dispatch(AppAction::change_store_value(NEW_STORE_VALUE));
    }

    pub fn render(&self) -> View {
        vec![
            format!("From store directly: {}", self.store_value),
            format!("[ {} ]", BUTTON_LABEL),
        ]
    }
}
