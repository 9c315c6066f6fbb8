use axum::Form;
use axum::Router;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use std::collections::HashMap;

use super::*;
use crate::config::Config;

fn state_for(idp_url: &str) -> AppState {
    let idp_url = idp_url.to_owned();
    let config = Config::from_lookup(move |key| match key {
        "IDP_URL" => Some(idp_url.clone()),
        "IDP_REALM" => Some("medinsight".to_owned()),
        _ => None,
    })
    .expect("config");
    AppState::new(config).expect("http client")
}

fn request(username: &str, password: &str) -> Json<TokenRequest> {
    Json(TokenRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Fake identity provider: accepts one password, echoes the grant fields.
async fn token_endpoint(Form(form): Form<HashMap<String, String>>) -> Response {
    if form.get("password").map(String::as_str) == Some("secret123") {
        let body = json!({
            "access_token": "tok",
            "client_id": form.get("client_id"),
            "grant_type": form.get("grant_type"),
            "scope": form.get("scope"),
        });
        (StatusCode::OK, Json(body)).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid_grant" }))).into_response()
    }
}

async fn spawn_idp() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route("/realms/medinsight/protocol/openid-connect/token", post(token_endpoint));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn password_grant_is_forwarded_as_form() {
    let idp = spawn_idp().await;
    let response = token(State(state_for(&idp)), request("amine@example.com", "secret123")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"))
    );
    let body = body_json(response).await;
    assert_eq!(body["access_token"], "tok");
    assert_eq!(body["client_id"], "medinsight-frontend");
    assert_eq!(body["grant_type"], "password");
    assert_eq!(body["scope"], "openid profile email");
}

#[tokio::test]
async fn rejected_credentials_keep_provider_status() {
    let idp = spawn_idp().await;
    let response = token(State(state_for(&idp)), request("amine@example.com", "wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "invalid_grant");
}

#[tokio::test]
async fn unreachable_provider_is_502() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let response = token(State(state_for(&format!("http://{addr}"))), request("a@b.tn", "x")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["message"], IDP_UNAVAILABLE);
}
