//! Store state marker trait.

use std::fmt::Debug;

/// State held by a `Store`.
///
/// `Default` is the state of a session that starts without a snapshot, and
/// lets the store move the current value into the reducer. `PartialEq`
/// backs `Dispatched::changed`.
pub trait StoreState: Clone + Debug + PartialEq + Default + 'static {}
