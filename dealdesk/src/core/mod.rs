//! # Core Abstractions
//!
//! Error types and the service trait used for dependency injection.
//!
//! - **[`error`]**: [`ApiError`] at the API boundary, [`AppError`] above it
//! - **[`service`]**: [`DealDeskService`], the async API surface every
//!   controller talks to
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dealdesk::core::service::DealDeskService;
//! use dealdesk::services::api::ApiClient;
//! use dealdesk::services::session::MemorySessionStore;
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let api: Arc<dyn DealDeskService> =
//!     Arc::new(ApiClient::with_base_url("http://127.0.0.1:3001", store));
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ApiErrorKind, AppError, Result};
pub use service::DealDeskService;
