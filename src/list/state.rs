use crate::mvi::ViewState;
use crate::query::{build_query, ListFilters, Pagination};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; `items` still holds the previous result.
    Failed { message: String },
}

/// A fetch the reducer asked for but nobody has started yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<F> {
    pub seq: u64,
    pub filters: F,
}

impl<F: ListFilters> FetchTicket<F> {
    pub fn query(&self) -> String {
        build_query(&self.filters)
    }
}

/// Everything a list view renders: filters, rows, count, load status.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F, T> {
    pub filters: F,
    pub status: LoadStatus,
    pub items: Vec<T>,
    pub total_items: u64,
    /// Sequence number of the most recently issued fetch.
    pub latest_seq: u64,
    pub pending: Option<FetchTicket<F>>,
}

impl<F: Default, T> Default for ListState<F, T> {
    fn default() -> Self {
        Self {
            filters: F::default(),
            status: LoadStatus::Idle,
            items: Vec::new(),
            total_items: 0,
            latest_seq: 0,
            pending: None,
        }
    }
}

impl<F, T> ViewState for ListState<F, T>
where
    F: ListFilters,
    T: Clone + PartialEq + Send + 'static,
{
}

impl<F: ListFilters, T> ListState<F, T> {
    pub fn with_filters(filters: F) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::with_page_size(self.filters.page(), self.total_items, self.filters.size())
    }

    /// Enters `Loading` for `filters` under a fresh sequence number.
    pub(crate) fn refetch(mut self, filters: F) -> Self {
        let seq = self.latest_seq + 1;
        self.latest_seq = seq;
        self.filters = filters.clone();
        self.status = LoadStatus::Loading;
        self.pending = Some(FetchTicket { seq, filters });
        self
    }

    /// Removes the pending fetch so it is started exactly once.
    pub fn take_pending(&mut self) -> Option<FetchTicket<F>> {
        self.pending.take()
    }
}
