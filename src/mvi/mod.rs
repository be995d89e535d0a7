//! Reducer primitives shared by the store and the app state.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Page
//!    ↑                              │
//!    └────────── dispatch ──────────┘
//! ```

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
