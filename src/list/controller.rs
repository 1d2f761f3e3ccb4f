use std::future::Future;

use crate::api::RequestError;
use crate::list::intent::ListIntent;
use crate::list::reducer::ListReducer;
use crate::list::state::{FetchTicket, ListState};
use crate::mvi::Reducer;
use crate::query::ListFilters;

/// One page of results plus the server's total count.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_items: u64,
}

/// Where a list view gets its rows from.
pub trait ListSource {
    type Filters: ListFilters;
    type Item: Clone + PartialEq + Send + 'static;

    fn fetch(
        &self,
        filters: &Self::Filters,
    ) -> impl Future<Output = Result<ListPage<Self::Item>, RequestError>> + Send;
}

type StateOf<S> = ListState<<S as ListSource>::Filters, <S as ListSource>::Item>;
type IntentOf<S> = ListIntent<<S as ListSource>::Filters, <S as ListSource>::Item>;

/// Drives a [`ListReducer`] and performs the fetches it asks for.
///
/// Fetches are never cancelled. Each one carries the sequence number it was
/// issued under, and the reducer ignores any outcome that is not the latest.
pub struct ListQuery<S: ListSource> {
    source: S,
    state: StateOf<S>,
}

impl<S: ListSource> ListQuery<S> {
    pub fn new(source: S) -> Self {
        Self::with_filters(source, S::Filters::default())
    }

    pub fn with_filters(source: S, filters: S::Filters) -> Self {
        Self {
            source,
            state: ListState::with_filters(filters),
        }
    }

    pub fn state(&self) -> &StateOf<S> {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Applies `intent` and returns the fetch it triggered, if any.
    pub fn dispatch(&mut self, intent: IntentOf<S>) -> Option<FetchTicket<S::Filters>> {
        ListReducer::<S::Filters, S::Item>::reduce_in_place(&mut self.state, intent);
        self.state.take_pending()
    }

    /// Performs the fetch for `ticket` and turns the outcome into an intent.
    ///
    /// Failures are logged here and reported as [`ListIntent::Failed`]; there
    /// is no retry.
    pub async fn run(&self, ticket: FetchTicket<S::Filters>) -> IntentOf<S> {
        tracing::debug!(seq = ticket.seq, query = %ticket.query(), "fetching list");
        match self.source.fetch(&ticket.filters).await {
            Ok(page) => ListIntent::Loaded {
                seq: ticket.seq,
                items: page.items,
                total_items: page.total_items,
            },
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "list fetch failed");
                ListIntent::Failed {
                    seq: ticket.seq,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Dispatches `intent` and, when it triggers a fetch, awaits the result.
    pub async fn apply(&mut self, intent: IntentOf<S>) -> &StateOf<S> {
        if let Some(ticket) = self.dispatch(intent) {
            let outcome = self.run(ticket).await;
            self.dispatch(outcome);
        }
        &self.state
    }

    /// Initial load with the current filters.
    pub async fn load(&mut self) -> &StateOf<S> {
        self.apply(ListIntent::Refresh).await
    }

    pub async fn set_filter(
        &mut self,
        field: <S::Filters as ListFilters>::Field,
    ) -> &StateOf<S> {
        self.apply(ListIntent::SetFilter(field)).await
    }

    pub async fn reset_filters(&mut self) -> &StateOf<S> {
        self.apply(ListIntent::Reset).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> &StateOf<S> {
        self.apply(ListIntent::GoToPage(page)).await
    }

    pub async fn previous_page(&mut self) -> &StateOf<S> {
        self.apply(ListIntent::PreviousPage).await
    }

    pub async fn next_page(&mut self) -> &StateOf<S> {
        self.apply(ListIntent::NextPage).await
    }
}
