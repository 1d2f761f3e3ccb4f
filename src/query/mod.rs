//! Filter sets, their query-string encoding, and page arithmetic.

mod encode;
mod filters;
mod pagination;

pub use encode::{
    build_query, encode_component, FilterValue, QueryParams, SEARCH_FIELDS, SEARCH_KEY,
};
pub use filters::{
    ActionFilter, ActionFilters, ActionSearchField, ListFilters, ProductFilter, ProductFilters,
    ProductSearchField, INCOME_KEY, OUTCOME_KEY,
};
pub use pagination::{page_count, Pagination, PAGE_SIZE};
