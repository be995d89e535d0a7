use tracing::debug;

use crate::app::AppState;
use crate::host::{Page, PageContext, View};

use super::store_value::StoreValuePanel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexProps {
    pub custom: String,
}

/// Landing page: shows `foo` from the store, a prop computed while
/// loading, and the store value panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexPage;

impl Page for IndexPage {
    type Props = IndexProps;

    fn initial_props(&self, ctx: &mut PageContext<'_>) -> IndexProps {
        debug!(
            pathname = %ctx.request().pathname,
            server = ctx.is_server(),
            foo = %ctx.state().foo,
            "index props"
        );
        IndexProps {
            custom: "custom".to_string(),
        }
    }

    fn render(&self, props: &IndexProps, state: &AppState) -> View {
        let mut lines = vec![
            format!("Prop from Redux {}", state.foo),
            format!("Prop from Page.getInitialProps {}", props.custom),
        ];
        lines.extend(StoreValuePanel::select(state).render());
        lines
    }
}
