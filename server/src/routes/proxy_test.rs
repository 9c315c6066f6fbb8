use axum::Router;
use axum::body::to_bytes;
use axum::http::HeaderValue;
use axum::routing::any;

use super::*;
use crate::config::Config;

fn state_for(gateway_url: &str) -> AppState {
    let gateway_url = gateway_url.to_owned();
    let config = Config::from_lookup(move |key| (key == "GATEWAY_URL").then(|| gateway_url.clone())).expect("config");
    AppState::new(config).expect("http client")
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn original(uri: &str) -> OriginalUri {
    OriginalUri(uri.parse().expect("uri"))
}

/// Fake gateway echoing what it received, with the path still encoded.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let cookie = headers.get("x-extra").is_some();
    (
        StatusCode::CREATED,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": auth,
            "contentType": content_type,
            "extraForwarded": cookie,
            "body": String::from_utf8_lossy(&body),
        })),
    )
        .into_response()
}

async fn spawn_gateway() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route("/api/{*path}", any(echo));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://gw:8080/", "appointments", Some("page=0&size=10")),
        "http://gw:8080/api/appointments?page=0&size=10"
    );
    assert_eq!(upstream_url("http://gw:8080", "/admin/users/kc-1", None), "http://gw:8080/api/admin/users/kc-1");
    assert_eq!(upstream_url("http://gw:8080", "audit/logs", Some("")), "http://gw:8080/api/audit/logs");
}

#[test]
fn gateway_path_strips_prefix_and_keeps_encoding() {
    assert_eq!(gateway_path(&"/api/appointments?page=0".parse().expect("uri")), "/appointments");
    assert_eq!(gateway_path(&"/api/audit/logs/service/a%3Fb%2Fc".parse().expect("uri")), "/audit/logs/service/a%3Fb%2Fc");
}

#[tokio::test]
async fn bad_gateway_carries_message_field() {
    let response = bad_gateway("hors ligne");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await, json!({ "message": "hors ligne" }));
}

#[tokio::test]
async fn forward_relays_request_and_response() {
    let gateway = spawn_gateway().await;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("x-extra", HeaderValue::from_static("1"));

    let response = forward(
        State(state_for(&gateway)),
        Method::POST,
        original("/api/appointments?notify=true"),
        headers,
        Bytes::from("{\"reason\":\"Fièvre\"}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/appointments");
    assert_eq!(echoed["query"], "notify=true");
    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["contentType"], "application/json");
    assert_eq!(echoed["extraForwarded"], false);
    assert_eq!(echoed["body"], r#"{"reason":"Fièvre"}"#);
}

#[tokio::test]
async fn unreachable_gateway_is_502() {
    // Bind then drop to get a local port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let response = forward(
        State(state_for(&format!("http://{addr}"))),
        Method::GET,
        original("/api/audit/logs"),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["message"], GATEWAY_UNAVAILABLE);
}

#[tokio::test]
async fn forward_keeps_encoded_segments() {
    let gateway = spawn_gateway().await;
    let response = forward(
        State(state_for(&gateway)),
        Method::GET,
        original("/api/audit/logs/service/a%3Fb%2Fc"),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let echoed = body_json(response).await;
    assert_eq!(echoed["path"], "/api/audit/logs/service/a%3Fb%2Fc");
    assert_eq!(echoed["query"], serde_json::Value::Null);
}
