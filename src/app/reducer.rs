//! Reducer for the session store.

use crate::mvi::Reducer;

use super::action::AppAction;
use super::state::AppState;

/// Reducer for session state transitions.
///
/// Known actions overwrite `foo` and keep every other field; anything else
/// returns the input state as-is.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Foo { payload } => AppState {
                foo: payload,
                ..state
            },
            AppAction::ChangeStoreValue { store_value } => AppState {
                foo: store_value,
                ..state
            },
            AppAction::Unrecognized { .. } => state,
        }
    }
}

/// Transition that also accepts a missing state, substituting the default
/// `{ foo: "" }` before matching on the action.
pub fn transition(state: Option<AppState>, action: AppAction) -> AppState {
    AppReducer::reduce(state.unwrap_or_default(), action)
}
