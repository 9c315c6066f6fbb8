//! Gateway relay for `/api/*`.
//!
//! Method, query, body and the `Authorization` / `Content-Type` headers go
//! upstream unchanged; status, content type and body come back unchanged.
//! The path is taken from the raw request URI so percent-encoded segments
//! reach the gateway still encoded. Only an unreachable gateway is answered
//! locally, with a 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use portal::endpoints::API_BASE;
use serde_json::json;

use crate::state::AppState;

/// Request headers copied to the upstream call.
pub(crate) const FORWARDED_HEADERS: [HeaderName; 2] = [AUTHORIZATION, CONTENT_TYPE];

pub(crate) const GATEWAY_UNAVAILABLE: &str = "Le service est momentanément indisponible. Veuillez réessayer.";

/// `{gateway}/api/{path}` with the original query string, if any.
pub(crate) fn upstream_url(gateway: &str, path: &str, query: Option<&str>) -> String {
    let base = gateway.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/api/{path}?{query}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Still-encoded gateway path for a request URI, without the `/api` prefix.
pub(crate) fn gateway_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(API_BASE).unwrap_or(path)
}

/// 502 with the JSON `message` shape the client reads error text from.
pub(crate) fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "message": message }))).into_response()
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.config.gateway_url, gateway_path(&uri), uri.query());
    let mut request = state.http.request(method.clone(), &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    match request.send().await {
        Ok(upstream) => {
            tracing::debug!(%method, %url, status = upstream.status().as_u16(), "gateway responded");
            relay(upstream).await
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "gateway unreachable");
            bad_gateway(GATEWAY_UNAVAILABLE)
        }
    }
}

/// Copy an upstream response back to the browser.
pub(crate) async fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    match upstream.bytes().await {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            match content_type {
                Some(value) => {
                    response.headers_mut().insert(CONTENT_TYPE, value);
                }
                None => {
                    response.headers_mut().remove(CONTENT_TYPE);
                }
            }
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, "upstream body read failed");
            bad_gateway(GATEWAY_UNAVAILABLE)
        }
    }
}
