//! Diagnostic observer that traces every dispatch.

use tracing::debug;

use crate::mvi::{Action, StoreState};

use super::observer::{Dispatched, Observer};

/// Emits one `debug` event per dispatch with the action and both states.
///
/// Attached only when the session runs with `debug` enabled. It reads the
/// transition and never touches the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchLogger;

impl<S: StoreState, A: Action> Observer<S, A> for DispatchLogger {
    fn observe(&mut self, dispatched: &Dispatched<'_, S, A>) {
        debug!(
            target: "pagestore::dispatch",
            sequence = dispatched.sequence,
            action = ?dispatched.action,
            previous = ?dispatched.previous,
            next = ?dispatched.next,
            changed = dispatched.changed(),
            "action dispatched"
        );
    }
}
