//! # Request Core Tests
//!
//! Header injection and the error-message policy.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::core::error::{ApiErrorKind, NETWORK_ERROR_MESSAGE};
use crate::services::api::RequestOptions;
use crate::services::session::SessionStore;
use crate::test_support::{client_for, unreachable_base_url, StubBody, StubServer};

#[tokio::test]
async fn test_injects_json_content_type_and_bearer_token() {
    // Arrange
    let stub = StubServer::new().on("GET", "/ping", 200, StubBody::Json(json!({ "ok": true })));
    let base = stub.start().await;
    let (client, store) = client_for(&base);
    store.set_token("tok-123");

    // Act
    let body: Value = client.request("/ping", RequestOptions::get()).await.unwrap();

    // Assert
    assert_eq!(body["ok"], true);
    let request = stub.last_request();
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let stub = StubServer::new().on("GET", "/ping", 200, StubBody::Json(json!({})));
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let _: Value = client.request("/ping", RequestOptions::get()).await.unwrap();

    assert_eq!(stub.last_request().authorization, None);
}

#[tokio::test]
async fn test_anonymous_request_skips_token() {
    let stub = StubServer::new().on("POST", "/contact", 200, StubBody::Empty);
    let base = stub.start().await;
    let (client, store) = client_for(&base);
    store.set_token("tok-123");

    client
        .request_unit("/contact", RequestOptions::post().anonymous())
        .await
        .unwrap();

    assert_eq!(stub.last_request().authorization, None);
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let stub = StubServer::new().on("POST", "/upload", 200, StubBody::Json(json!({})));
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let options = RequestOptions::post()
        .header(CONTENT_TYPE, HeaderValue::from_static("text/csv"))
        .header(
            reqwest::header::HeaderName::from_static("x-request-source"),
            HeaderValue::from_static("dashboard"),
        );
    let _: Value = client.request("/upload", options).await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.content_type.as_deref(), Some("text/csv"));
    assert_eq!(
        request.headers.get("x-request-source").and_then(|v| v.to_str().ok()),
        Some("dashboard")
    );
    assert_eq!(request.headers.get_all(CONTENT_TYPE.as_str()).iter().count(), 1);
}

#[tokio::test]
async fn test_error_message_taken_from_json_body() {
    let stub = StubServer::new().on(
        "POST",
        "/deals",
        422,
        StubBody::Json(json!({ "message": "Amount must be positive" })),
    );
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let err = client
        .request::<Value>("/deals", RequestOptions::post())
        .await
        .unwrap_err();

    assert_eq!(err.status, 422);
    assert_eq!(err.message, "Amount must be positive");
    assert_eq!(err.kind(), ApiErrorKind::ServerRejected);
}

#[tokio::test]
async fn test_error_message_falls_back_to_status_line() {
    let stub = StubServer::new()
        .on("GET", "/down", 503, StubBody::Text("upstream exploded"))
        .on("GET", "/locked", 401, StubBody::Json(json!({ "error": "nope" })))
        .on("GET", "/blank", 500, StubBody::Json(json!({ "message": "" })));
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let err = client.request::<Value>("/down", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.status, 503);
    assert_eq!(err.message, "HTTP 503: Service Unavailable");

    let err = client.request::<Value>("/locked", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.message, "HTTP 401: Unauthorized");

    let err = client.request::<Value>("/blank", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.message, "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_unreachable_server_is_status_zero() {
    let (client, _store) = client_for(&unreachable_base_url());

    let err = client
        .request::<Value>("/deals", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.status, 0);
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
    assert!(err.is_network());

    let err = client
        .request_bytes("/reports/r1/export", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.status, 0);
}

#[tokio::test]
async fn test_unparsable_success_body_is_status_zero() {
    let stub = StubServer::new().on("GET", "/deals", 200, StubBody::Text("<html>maintenance</html>"));
    let base = stub.start().await;
    let (client, _store) = client_for(&base);

    let err = client
        .request::<Vec<shared::Deal>>("/deals", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.status, 0);
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let stub = StubServer::new().on("GET", "/deals", 200, StubBody::Json(json!([])));
    let base = stub.start().await;
    let (client, _store) = client_for(&format!("{}/", base));

    let deals: Vec<shared::Deal> = client.request("/deals", RequestOptions::get()).await.unwrap();

    assert!(deals.is_empty());
    assert_eq!(stub.last_request().path, "/deals");
}
