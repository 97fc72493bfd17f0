//! Response Cache Layer
//!
//! Whole-response caching for GET routes, kept in its own [`CacheStore`]
//! so it never shares keys or counters with the collection cache.
//!
//! [`CacheStore`]: crate::cache::CacheStore

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::cache::{CacheBackend, SharedCacheStore, MAX_VALUE_SIZE};
use crate::error::ServiceError;

/// Header reporting whether the response tier served the request.
pub const X_CACHE: &str = "x-cache";

/// Cached JSON bodies keyed by request path and query.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: SharedCacheStore,
    ttl_seconds: u64,
}

impl ResponseCache {
    pub fn new(store: SharedCacheStore, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    pub fn store(&self) -> &SharedCacheStore {
        &self.store
    }

    fn key_for(request: &Request) -> String {
        format!("response:{}", request.uri())
    }

    async fn lookup(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Response cache lookup failed for {}: {}", key, e);
                None
            }
        }
    }

    async fn remember(&self, key: &str, body: String) {
        if let Err(e) = self.store.set(key, body, self.ttl_seconds).await {
            warn!("Response cache write failed for {}: {}", key, e);
        }
    }

    fn decorate(&self, response: &mut Response, status: &'static str) {
        let headers = response.headers_mut();
        headers.insert(HeaderName::from_static(X_CACHE), HeaderValue::from_static(status));
        if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", self.ttl_seconds)) {
            headers.insert(header::CACHE_CONTROL, value);
        }
    }
}

/// Middleware serving successful JSON GET responses from the response tier.
///
/// Errors, non-JSON responses and bodies over [`MAX_VALUE_SIZE`] pass
/// through uncached.
pub async fn cache_response(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = ResponseCache::key_for(&request);

    if let Some(body) = cache.lookup(&key).await {
        debug!("Response cache hit for {}", key);
        let mut response = (
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response();
        cache.decorate(&mut response, "HIT");
        return response;
    }

    let response = next.run(request).await;

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false);

    if response.status() != StatusCode::OK || !is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ServiceError::Internal(format!("reading response body: {}", e))
                .into_response()
        }
    };

    if bytes.len() > MAX_VALUE_SIZE {
        warn!(size = bytes.len(), "Not caching oversized response for {}", key);
    } else {
        match std::str::from_utf8(&bytes) {
            Ok(text) => cache.remember(&key, text.to_string()).await,
            Err(e) => warn!("Not caching non-UTF-8 response for {}: {}", key, e),
        }
    }

    let mut response = Response::from_parts(parts, Body::from(bytes));
    cache.decorate(&mut response, "MISS");
    response
}
