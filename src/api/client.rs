use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use super::error::RequestError;
use super::interceptor::{AuthInterceptor, Interceptor, NotifyInterceptor, RequestContext};
use crate::config::Config;
use crate::notify::Notifier;
use crate::session::{Navigator, SessionGuard, SessionStore};

/// Shared client for every dashboard endpoint.
///
/// Each call runs the interceptor pipeline and always hands the final
/// outcome back to the caller; side effects never swallow a failure.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl ApiClient {
    /// Client with the standard pipeline: auth, notifications, session guard.
    pub fn new(
        config: &Config,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, RequestError> {
        let guard = SessionGuard::new(store.clone(), navigator, &config.session.signin_path);
        ApiClientBuilder::new(&config.api.base_url)
            .interceptor(Arc::new(AuthInterceptor::new(store)))
            .interceptor(Arc::new(NotifyInterceptor::new(
                notifier,
                &config.notifications.fallback_error_message,
            )))
            .interceptor(Arc::new(guard))
            .build()
    }

    pub fn builder(base_url: &str) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// `GET path?query`. `query` is an already-encoded query string.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, RequestError> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let body = encode_body(path, body)?;
        self.send(Method::POST, path, None, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let body = encode_body(path, body)?;
        self.send(Method::PUT, path, None, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.send(Method::DELETE, path, None, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<Value>,
    ) -> Result<T, RequestError> {
        let ctx = RequestContext {
            request_id: uuid::Uuid::new_v4().to_string(),
            method,
            path: path.to_string(),
        };
        let span = tracing::info_span!(
            "api_request",
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
        );

        async move {
            let payload = match self.exchange(&ctx, query, body).await {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::warn!(error = %err, "request failed");
                    for interceptor in self.interceptors.iter() {
                        interceptor.on_error(&ctx, &err);
                    }
                    return Err(err);
                }
            };

            for interceptor in self.interceptors.iter() {
                interceptor.on_response(&ctx, &payload);
            }

            serde_json::from_value(payload).map_err(|e| {
                tracing::warn!(error = %e, "response payload did not match expected shape");
                RequestError::Decode {
                    path: ctx.path.clone(),
                    source: e,
                }
            })
        }
        .instrument(span)
        .await
    }

    /// One round trip: headers through `on_request`, send, classify status.
    async fn exchange(
        &self,
        ctx: &RequestContext,
        query: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for interceptor in self.interceptors.iter() {
            interceptor.on_request(ctx, &mut headers);
        }

        let url = self.url_for(&ctx.path, query);
        let mut builder = self
            .client
            .request(ctx.method.clone(), url)
            .headers(headers);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| RequestError::Transport {
            path: ctx.path.clone(),
            source: e,
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| RequestError::Transport {
            path: ctx.path.clone(),
            source: e,
        })?;
        // Non-JSON bodies (proxies, empty 204s) decode as null.
        let payload: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        tracing::debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(payload);
        }

        Err(RequestError::Status {
            status: status.as_u16(),
            message: super::interceptor::payload_message(&payload).map(str::to_string),
        })
    }

    fn url_for(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

fn encode_body<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|e| RequestError::Encode {
        path: path.to_string(),
        source: e,
    })
}

/// Assembles an [`ApiClient`] with a custom interceptor pipeline.
pub struct ApiClientBuilder {
    base_url: String,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClientBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            interceptors: Vec::new(),
        }
    }

    /// Appends a stage; stages run in the order they were added.
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient, RequestError> {
        let client = Client::builder().build().map_err(RequestError::Setup)?;
        Ok(ApiClient {
            client,
            base_url: self.base_url,
            interceptors: Arc::new(self.interceptors),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_path_and_query() {
        let client = ApiClient::builder("http://localhost:5000/api/v1/")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for("/products/all", Some("page=1&size=10")),
            "http://localhost:5000/api/v1/products/all?page=1&size=10"
        );
        assert_eq!(
            client.url_for("/balance", Some("")),
            "http://localhost:5000/api/v1/balance"
        );
        assert_eq!(
            client.url_for("/balance", None),
            "http://localhost:5000/api/v1/balance"
        );
    }
}
