//! The state container.

use crate::mvi::Reducer;

use super::observer::{Dispatched, Observer};

/// Narrow dispatch capability handed to page code.
///
/// Pages never own the store; they get `&mut dyn Dispatch<A>` for the
/// duration of a callback.
pub trait Dispatch<A> {
    fn dispatch(&mut self, action: A);
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type BoxedObserver<R> =
    Box<dyn Observer<<R as Reducer>::State, <R as Reducer>::Action>>;

/// Holds exactly one current state for a reducer `R`.
///
/// `dispatch` is synchronous: reduce, replace, notify, return. Serial call
/// order is serial apply order, and `state()` right after `dispatch`
/// always returns that dispatch's result.
pub struct Store<R: Reducer> {
    state: R::State,
    observers: Vec<(SubscriptionId, BoxedObserver<R>)>,
    next_subscription: u64,
    dispatch_count: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_subscription: 0,
            dispatch_count: 0,
        }
    }

    pub fn with_observers(initial: R::State, observers: Vec<BoxedObserver<R>>) -> Self {
        let mut store = Self::new(initial);
        for observer in observers {
            store.subscribe_boxed(observer);
        }
        store
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Consume the store and return its final state.
    pub fn into_state(self) -> R::State {
        self.state
    }

    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer<R::State, R::Action> + 'static,
    {
        self.subscribe_boxed(Box::new(observer))
    }

    /// Register a closure observer.
    pub fn subscribe_fn<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Dispatched<'_, R::State, R::Action>) + 'static,
    {
        self.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Apply `action`, store the result, then notify observers.
    pub fn dispatch(&mut self, action: R::Action) {
        self.dispatch_count += 1;

        if self.observers.is_empty() {
            self.state = R::reduce(std::mem::take(&mut self.state), action);
            return;
        }

        let previous = self.state.clone();
        self.state = R::reduce(std::mem::take(&mut self.state), action.clone());

        let dispatched = Dispatched {
            sequence: self.dispatch_count,
            action: &action,
            previous: &previous,
            next: &self.state,
        };
        for (_, observer) in &mut self.observers {
            observer.observe(&dispatched);
        }
    }

    fn subscribe_boxed(&mut self, observer: BoxedObserver<R>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }
}

impl<R: Reducer> Dispatch<R::Action> for Store<R> {
    fn dispatch(&mut self, action: R::Action) {
        Store::dispatch(self, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppAction, AppReducer, AppState};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn make_store() -> Store<AppReducer> {
        Store::new(AppState::default())
    }

    #[test]
    fn dispatch_updates_state() {
        let mut store = make_store();
        store.dispatch(AppAction::foo("foo"));
        assert_eq!(store.state().foo, "foo");
        assert_eq!(store.dispatch_count(), 1);
    }

    #[test]
    fn observers_see_new_state_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = make_store();

        for name in ["first", "second"] {
            let seen = seen.clone();
            store.subscribe_fn(move |d| {
                seen.borrow_mut().push((name, d.sequence, d.next.foo.clone()));
            });
        }

        store.dispatch(AppAction::foo("a"));

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1, "a".to_string()), ("second", 1, "a".to_string())]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = make_store();
        let counter = count.clone();
        let id = store.subscribe_fn(move |_| {
            *counter.borrow_mut() += 1;
        });

        store.dispatch(AppAction::foo("a"));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(AppAction::foo("b"));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn observer_gets_previous_state() {
        let previous = Rc::new(RefCell::new(None));
        let mut store = Store::<AppReducer>::new(AppState::new("old"));
        let slot = previous.clone();
        store.subscribe_fn(move |d| {
            *slot.borrow_mut() = Some((d.previous.foo.clone(), d.changed()));
        });

        store.dispatch(AppAction::change_store_value("new"));

        assert_eq!(*previous.borrow(), Some(("old".to_string(), true)));
    }

    #[test]
    fn dispatch_through_trait_object() {
        let mut store = make_store();
        {
            let dispatch: &mut dyn Dispatch<AppAction> = &mut store;
            dispatch.dispatch(AppAction::change_store_value("via trait"));
        }
        assert_eq!(store.into_state().foo, "via trait");
    }
}
