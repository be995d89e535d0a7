//! Session state feature module.
//!
//! Holds the single shared value pages read and write.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state record (`foo` plus preserved extra fields)
//! - `action.rs` - Tagged actions (`FOO`, `CHANGE_STORE_VALUE`, anything else)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{AppAction, CHANGE_STORE_VALUE, FOO};
pub use reducer::{transition, AppReducer};
pub use state::AppState;
