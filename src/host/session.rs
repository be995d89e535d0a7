use tracing::{debug, info, info_span, Span};
use uuid::Uuid;

use crate::app::{AppAction, AppReducer, AppState};
use crate::store::{Dispatch, Observer, Store, SubscriptionId};

use super::options::{StoreFactory, StoreOptions};
use super::page::{Page, PageContext, PageRequest, View};
use super::stash::{Snapshot, SnapshotError, SnapshotStash};

/// One rendering session.
///
/// Owns exactly one store for its whole lifetime and threads it
/// explicitly through page loading, rendering and interaction.
pub struct Session {
    id: Uuid,
    options: StoreOptions,
    store: Store<AppReducer>,
    span: Span,
}

impl Session {
    /// Create the session's store through `factory` and dispatch
    /// `bootstrap` (if any) before anything else can touch it.
    pub fn begin(
        factory: &dyn StoreFactory,
        initial: Option<AppState>,
        options: StoreOptions,
        bootstrap: Option<AppAction>,
    ) -> Self {
        let id = Uuid::new_v4();
        let span = info_span!(
            "session",
            id = %id,
            server = options.is_server,
            key = %options.store_key
        );

        let store = {
            let _enter = span.enter();
            let mut store = factory.create(initial, &options);
            if let Some(action) = bootstrap {
                debug!(kind = action.kind().unwrap_or("-"), "dispatching bootstrap action");
                store.dispatch(action);
            }
            info!(debug_observer = options.debug, "session started");
            store
        };

        Self {
            id,
            options,
            store,
            span,
        }
    }

    /// Start a client session from the snapshot a server session stashed
    /// under `options.store_key`. No bootstrap action is dispatched; the
    /// server already did that.
    pub fn rehydrate(
        factory: &dyn StoreFactory,
        stash: &SnapshotStash,
        options: StoreOptions,
    ) -> Result<Self, SnapshotError> {
        let initial = stash.restore(&options.store_key)?;
        Ok(Self::begin(factory, Some(initial), options, None))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn dispatch_count(&self) -> u64 {
        self.store.dispatch_count()
    }

    /// Register a rendering subscription on the session's store.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer<AppState, AppAction> + 'static,
    {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Run the page's data loading with dispatch/read access to the store.
    pub fn load_page<P: Page>(&mut self, page: &P, request: &PageRequest) -> P::Props {
        let _enter = self.span.enter();
        debug!(pathname = %request.pathname, "loading page props");
        let mut ctx = PageContext::new(&mut self.store, request, self.options.is_server);
        page.initial_props(&mut ctx)
    }

    pub fn render<P: Page>(&self, page: &P, props: &P::Props) -> View {
        let _enter = self.span.enter();
        page.render(props, self.store.state())
    }

    /// Run a user-interaction handler. The handler sees the state as it was
    /// when the interaction started and may dispatch any number of actions.
    pub fn interact<T>(
        &mut self,
        handler: impl FnOnce(&AppState, &mut dyn Dispatch<AppAction>) -> T,
    ) -> T {
        let _enter = self.span.enter();
        let state = self.store.state().clone();
        handler(&state, &mut self.store)
    }

    /// End the session. Server sessions stash their final state under
    /// `store_key` for a client session to rehydrate from.
    pub fn finish(self, stash: &SnapshotStash) -> Result<AppState, SnapshotError> {
        let Session {
            options,
            store,
            span,
            ..
        } = self;
        let _enter = span.enter();

        let dispatches = store.dispatch_count();
        let state = store.into_state();
        if options.is_server {
            stash.stash(&options.store_key, Snapshot::capture(&state)?);
            debug!("stashed final state");
        }
        info!(dispatches, "session finished");
        Ok(state)
    }
}
