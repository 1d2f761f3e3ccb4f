//! Client library for the farm inventory dashboard API.
//!
//! - [`api`]: shared HTTP client with its interceptor pipeline, plus the
//!   products/actions endpoint wrappers
//! - [`session`]: credential storage and the 401 session guard
//! - [`notify`]: success/error notification sinks
//! - [`query`]: typed filter sets, query-string encoding, pagination
//! - [`list`]: list view state machine with stale-result protection
//! - [`model`]: wire types

pub mod api;
pub mod config;
pub mod list;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod notify;
pub mod query;
pub mod session;
