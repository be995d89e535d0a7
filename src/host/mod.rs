//! Host integration: per-session store construction, bootstrap dispatch,
//! page lifecycle glue and server-to-client snapshot handoff.
//!
//! A [`Session`] owns exactly one store. Pages never see the store
//! itself; they get a [`PageContext`] while loading props and a
//! `&mut dyn Dispatch` while handling interaction.

mod options;
mod page;
mod session;
mod stash;

pub use options::{make_store, StoreFactory, StoreOptions};
pub use page::{Page, PageContext, PageRequest, View};
pub use session::Session;
pub use stash::{Snapshot, SnapshotError, SnapshotStash};
