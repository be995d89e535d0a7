//! Observers notified after each completed dispatch.

/// A completed transition, handed to observers by reference.
#[derive(Debug)]
pub struct Dispatched<'a, S, A> {
    /// 1-based position of this dispatch in the store's lifetime.
    pub sequence: u64,
    pub action: &'a A,
    pub previous: &'a S,
    pub next: &'a S,
}

impl<S: PartialEq, A> Dispatched<'_, S, A> {
    pub fn changed(&self) -> bool {
        self.previous != self.next
    }
}

/// Receives every transition of a store.
///
/// Observers run synchronously inside `dispatch`, after the new state has
/// been stored. They only get shared references, so they cannot alter the
/// outcome of a dispatch.
pub trait Observer<S, A> {
    fn observe(&mut self, dispatched: &Dispatched<'_, S, A>);
}

impl<S, A, F> Observer<S, A> for F
where
    F: FnMut(&Dispatched<'_, S, A>),
{
    fn observe(&mut self, dispatched: &Dispatched<'_, S, A>) {
        self(dispatched)
    }
}
