//! HTTP client for the dashboard API and the endpoint wrappers built on it.

mod actions;
mod client;
mod error;
mod interceptor;
mod products;

pub use actions::ActionsApi;
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{RequestError, UNAUTHORIZED};
pub use interceptor::{
    payload_message, AuthInterceptor, Interceptor, NotifyInterceptor, RequestContext,
};
pub use products::ProductsApi;
