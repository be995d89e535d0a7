//! Reducer trait.

use super::action::Action;
use super::state::StoreState;

/// Computes a store's next state.
///
/// `reduce` is the only place session state changes. It runs inside
/// `Store::dispatch` and must not perform I/O or panic; actions it does
/// not handle return `state` untouched.
pub trait Reducer {
    type State: StoreState;

    type Action: Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
