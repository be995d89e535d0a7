//! Session store: owns the current state and applies actions through a
//! reducer, notifying observers after every transition.

mod container;
mod logger;
mod observer;

pub use container::{Dispatch, Store, SubscriptionId};
pub use logger::DispatchLogger;
pub use observer::{Dispatched, Observer};
