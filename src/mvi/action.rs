//! Action marker trait.

use std::fmt::Debug;

/// A message a store's reducer consumes.
///
/// The reducer takes actions by value; the store clones one first when
/// observers are registered so they can see what was applied.
pub trait Action: Clone + Debug + 'static {}
