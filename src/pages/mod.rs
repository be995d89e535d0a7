//! Example pages rendered by a session.
//!
//! Plain data units: they receive state and a dispatch capability as
//! arguments and produce text lines.

mod index;
mod store_value;

pub use index::{IndexPage, IndexProps};
pub use store_value::{StoreValuePanel, BUTTON_LABEL, NEW_STORE_VALUE};
