//! Test helpers: an in-process stub of the ForexKing API and token fixtures.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::services::api::ApiClient;
use crate::services::session::{MemorySessionStore, SessionStore};

/// Canned response body.
#[derive(Debug, Clone)]
pub enum StubBody {
    Json(Value),
    Text(&'static str),
    Bytes(Vec<u8>),
    Empty,
}

/// A request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

type Routes = HashMap<(String, String), (u16, StubBody)>;

/// Routes requests by `(method, path)` to canned responses and records them.
#[derive(Clone, Default)]
pub struct StubServer {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: &str, path: &str, status: u16, body: StubBody) -> Self {
        self.routes
            .lock()
            .insert((method.to_string(), path.to_string()), (status, body));
        self
    }

    /// Bind to an ephemeral port and return the base URL.
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub server should bind");
        let addr = listener.local_addr().expect("stub server address");
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server crashed");
        });

        format!("http://{}", addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Captured {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("stub server received no request")
    }
}

async fn handle(
    State(server): State<StubServer>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    server.requests.lock().push(Captured {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        headers: headers.clone(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let route = server
        .routes
        .lock()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    let Some((status, body)) = route else {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "No stub route" }))).into_response();
    };

    let status = StatusCode::from_u16(status).expect("valid stub status");
    match body {
        StubBody::Json(value) => (status, Json(value)).into_response(),
        StubBody::Text(text) => (status, text).into_response(),
        StubBody::Bytes(bytes) => {
            (status, [(CONTENT_TYPE, "application/octet-stream")], bytes).into_response()
        }
        StubBody::Empty => status.into_response(),
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// A JWT-shaped token whose payload carries the given identity. Unsigned.
pub fn fake_jwt(sub: &str, name: &str, email: &str) -> String {
    let header = lib_utils::b64u_encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = lib_utils::b64u_encode(
        json!({ "sub": sub, "name": name, "email": email }).to_string(),
    );
    format!("{}.{}.signature", header, payload)
}

/// Client against `base_url` with a fresh in-memory store.
pub fn client_for(base_url: &str) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let session: Arc<dyn SessionStore> = store.clone();
    (ApiClient::with_base_url(base_url, session), store)
}
