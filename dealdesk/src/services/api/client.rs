//! # API Client
//!
//! The HTTP request core every domain call goes through.
//!
//! ## Request policy
//!
//! - `Content-Type: application/json` is always sent.
//! - `Authorization: Bearer <token>` is sent when the session store holds a
//!   token (unless the request is marked [`anonymous`](RequestOptions::anonymous)).
//! - Caller-supplied headers are applied last and replace the defaults.
//!
//! ## Failure policy
//!
//! - Non-2xx: the `message` field of a JSON error body if present, otherwise
//!   `"HTTP <status>: <reason>"`; the error carries the real status.
//! - Transport failure, or a 2xx body that cannot be read as expected:
//!   status `0` with [`NETWORK_ERROR_MESSAGE`](crate::core::error::NETWORK_ERROR_MESSAGE).
//!
//! No retries, no caching, no deduplication of concurrent identical calls.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{ContactMessage, Deal, DealUpdate, ErrorResponse, ExportFormat, NewDeal, Report, User};

use crate::config::{ClientConfig, DEFAULT_CONTACT_URL};
use crate::core::error::ApiError;
use crate::core::service::DealDeskService;
use crate::services::session::SessionStore;

/// Options for a single request: method, JSON body, extra headers, query.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Vec<u8>>,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub anonymous: bool,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode request body");
            ApiError::new(0, format!("Failed to encode request body: {}", e))
        })?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Add a header, replacing any default of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Do not attach the session token.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

/// HTTP client for the ForexKing API.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    contact_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        Self {
            client,
            base_url: config.api_base_url.clone(),
            contact_url: config.contact_url.clone(),
            session,
        }
    }

    /// Create a client for `base_url` with transport defaults.
    pub fn with_base_url(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            session,
        }
    }

    /// Override the contact form endpoint.
    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn contact_url(&self) -> &str {
        &self.contact_url
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and parse the JSON success body as `T`.
    #[tracing::instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.send(&self.url(path), options).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse response");
            ApiError::network()
        })
    }

    /// Send a request whose success body is not needed.
    #[tracing::instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request_unit(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        self.send(&self.url(path), options).await.map(drop)
    }

    /// Send a request and return the raw success payload.
    #[tracing::instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request_bytes(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let response = self.send(&self.url(path), options).await?;
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read response body");
            ApiError::network()
        })?;
        tracing::debug!(bytes = bytes.len(), "Downloaded payload");
        Ok(bytes.to_vec())
    }

    /// Like [`request_unit`](Self::request_unit) but against an absolute URL.
    pub(crate) async fn request_url_unit(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        self.send(url, options).await.map(drop)
    }

    fn headers_for(&self, options: &RequestOptions) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if !options.anonymous {
            if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    tracing::error!(error = %e, "Stored token is not a valid header value");
                    ApiError::network()
                })?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }

    async fn send(&self, url: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let headers = self.headers_for(&options)?;
        let RequestOptions {
            method, body, query, ..
        } = options;

        let mut request = self.client.request(method, url).headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Network error");
            ApiError::network()
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            return Ok(response);
        }

        let error = error_from_response(response).await;
        tracing::warn!(
            status = error.status,
            error = %error.message,
            duration_ms = duration.as_millis(),
            "Request rejected"
        );
        Err(error)
    }
}

/// Build the [`ApiError`] for a non-2xx response.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorResponse>(&body).ok())
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| status_message(status));

    ApiError::new(status.as_u16(), message)
}

/// `"HTTP <status>: <reason>"`, the message used when the server sends none.
pub fn status_message(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
}

#[async_trait]
impl DealDeskService for ApiClient {
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        super::auth::sign_up(self, name, email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ApiError> {
        super::auth::sign_in(self, email, password).await
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        super::auth::sign_out(self).await
    }

    fn current_user(&self) -> Option<User> {
        super::auth::unverified_local_user(self)
    }

    async fn get_deals(&self) -> Result<Vec<Deal>, ApiError> {
        super::deals::get_deals(self).await
    }

    async fn create_deal(&self, deal: &NewDeal) -> Result<Deal, ApiError> {
        super::deals::create_deal(self, deal).await
    }

    async fn update_deal(&self, id: &str, update: &DealUpdate) -> Result<Deal, ApiError> {
        super::deals::update_deal(self, id, update).await
    }

    async fn delete_deal(&self, id: &str) -> Result<(), ApiError> {
        super::deals::delete_deal(self, id).await
    }

    async fn get_reports(&self) -> Result<Vec<Report>, ApiError> {
        super::reports::get_reports(self).await
    }

    async fn generate_report(&self, kind: &str, filters: Option<Value>) -> Result<Report, ApiError> {
        super::reports::generate_report(self, kind, filters).await
    }

    async fn export_report(&self, report_id: &str, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        super::reports::export_report(self, report_id, format).await
    }

    async fn export_deals_report(
        &self,
        filters: Option<Value>,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError> {
        super::reports::export_deals_report(self, filters, format).await
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        super::contact::submit_contact(self, message).await
    }
}
