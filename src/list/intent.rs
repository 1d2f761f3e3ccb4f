use crate::mvi::Intent;
use crate::query::ListFilters;

#[derive(Debug, Clone)]
pub enum ListIntent<F: ListFilters, T> {
    /// Replace one filter field. The page is left as it is.
    SetFilter(F::Field),
    /// Jump to a page offered by the pagination control.
    GoToPage(u32),
    PreviousPage,
    NextPage,
    /// Back to the default filter set.
    Reset,
    /// Refetch with the current filters, e.g. after a write.
    Refresh,
    Loaded {
        seq: u64,
        items: Vec<T>,
        total_items: u64,
    },
    Failed {
        seq: u64,
        message: String,
    },
}

impl<F: ListFilters, T: Send + 'static> Intent for ListIntent<F, T> {}
