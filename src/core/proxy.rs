//! Same-origin proxy for the backend API
//!
//! The forms post to relative `/api/...` paths with cookies included. When the
//! backend runs as a separate service, this router forwards those calls so the
//! session and CSRF cookies stay on one origin:
//! - ANY /api/{*path} -> {BACKEND_URL}/api/{path}?{query}
//!
//! Redirects are handed back to the browser untouched, and the public host is
//! passed on as `X-Forwarded-Host` / `X-Forwarded-Proto` so the backend's
//! origin checks see the address the browser used.

use std::time::Duration;

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde_json::json;

/// Largest request body forwarded upstream (cover images included)
pub const MAX_FORWARDED_BODY: usize = 16 * 1024 * 1024;

/// Request headers passed through to the backend
const FORWARDED_REQUEST_HEADERS: &[&str] = &[
    "accept",
    "content-type",
    "cookie",
    "origin",
    "referer",
    "user-agent",
    "x-csrftoken",
];

/// Response headers passed back to the browser
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "location"];

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Shared state for the proxy handler
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
    timeout: Duration,
}

impl ProxyState {
    /// Build the proxy state with a client that never follows redirects
    pub fn new(backend_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            backend_url: backend_url.into(),
            timeout,
        })
    }
}

/// Create the proxy router for `/api/*`
pub fn api_proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .with_state(state)
}

/// Join the backend base URL with the incoming path and query
pub fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!(
        "{}/{}",
        backend_url.trim_end_matches('/'),
        path_and_query.trim_start_matches('/')
    )
}

/// Copy the allowed headers from `from`, keeping repeated values
fn filter_headers(from: &HeaderMap, allowed: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in allowed {
        for value in from.get_all(*name) {
            if let Ok(name) = header::HeaderName::from_bytes(name.as_bytes()) {
                headers.append(name, value.clone());
            }
        }
    }
    headers
}

/// Allowed request headers plus the public host and scheme.
///
/// Values set by an outer proxy are kept; otherwise the `Host` the browser
/// sent becomes `X-Forwarded-Host` and the scheme defaults to `http`.
fn upstream_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = filter_headers(incoming, FORWARDED_REQUEST_HEADERS);

    let host = incoming
        .get(X_FORWARDED_HOST)
        .or_else(|| incoming.get(header::HOST));
    if let Some(host) = host {
        headers.insert(X_FORWARDED_HOST, host.clone());
    }

    let proto = incoming
        .get(X_FORWARDED_PROTO)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("http"));
    headers.insert(X_FORWARDED_PROTO, proto);

    headers
}

fn proxy_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn proxy_handler(State(state): State<ProxyState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = upstream_url(&state.backend_url, path_and_query);

    let body = match to_bytes(body, MAX_FORWARDED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Rejected oversized API request to {}: {}", url, e);
            return proxy_error(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
        }
    };

    tracing::debug!("Proxying {} {}", parts.method, url);

    let upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(upstream_headers(&parts.headers))
        .timeout(state.timeout)
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Backend request {} {} failed: {}", parts.method, url, e);
            return proxy_error(StatusCode::BAD_GATEWAY, "Backend unavailable");
        }
    };

    let status = upstream.status();
    let headers = filter_headers(upstream.headers(), FORWARDED_RESPONSE_HEADERS);

    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read backend response for {}: {}", url, e);
            return proxy_error(StatusCode::BAD_GATEWAY, "Backend response interrupted");
        }
    };

    let mut response = (status, Body::from(bytes)).into_response();
    response.headers_mut().extend(headers);
    response
}
