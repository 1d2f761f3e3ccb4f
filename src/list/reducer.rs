use std::marker::PhantomData;

use crate::list::intent::ListIntent;
use crate::list::state::{ListState, LoadStatus};
use crate::mvi::Reducer;
use crate::query::ListFilters;

/// State machine of a paged, filterable list.
///
/// Every filter or page change replaces the filter set, bumps the sequence
/// number and leaves a pending fetch. Results are accepted only for the
/// latest sequence number; older ones are dropped.
pub struct ListReducer<F, T>(PhantomData<fn() -> (F, T)>);

impl<F, T> Reducer for ListReducer<F, T>
where
    F: ListFilters,
    T: Clone + PartialEq + Send + 'static,
{
    type State = ListState<F, T>;
    type Intent = ListIntent<F, T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::SetFilter(field) => {
                let mut filters = state.filters.clone();
                filters.apply(field);
                state.refetch(filters)
            }
            ListIntent::GoToPage(page) => {
                let mut filters = state.filters.clone();
                filters.set_page(page);
                state.refetch(filters)
            }
            ListIntent::PreviousPage => {
                let mut pagination = state.pagination();
                if !pagination.go_to_previous() {
                    return state;
                }
                let mut filters = state.filters.clone();
                filters.set_page(pagination.current_page());
                state.refetch(filters)
            }
            ListIntent::NextPage => {
                let mut pagination = state.pagination();
                if !pagination.go_to_next() {
                    return state;
                }
                let mut filters = state.filters.clone();
                filters.set_page(pagination.current_page());
                state.refetch(filters)
            }
            ListIntent::Reset => state.refetch(F::default()),
            ListIntent::Refresh => {
                let filters = state.filters.clone();
                state.refetch(filters)
            }
            ListIntent::Loaded {
                seq,
                items,
                total_items,
            } => {
                if seq != state.latest_seq {
                    tracing::debug!(seq, latest = state.latest_seq, "discarding stale list result");
                    return state;
                }
                ListState {
                    status: LoadStatus::Ready,
                    items,
                    total_items,
                    ..state
                }
            }
            ListIntent::Failed { seq, message } => {
                if seq != state.latest_seq {
                    tracing::debug!(seq, latest = state.latest_seq, "discarding stale list failure");
                    return state;
                }
                ListState {
                    status: LoadStatus::Failed { message },
                    ..state
                }
            }
        }
    }
}
