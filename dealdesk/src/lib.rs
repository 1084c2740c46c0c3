//! # DealDesk - ForexKing Dashboard Client
//!
//! Client library and CLI for the ForexKing forex dashboard: account
//! sessions, deal tracking, report exports and the landing-page forms.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dealdesk (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Page controllers (auth, deals, reports)  │
//! │  widgets    - Chat, upload, contact, agreement         │
//! │  services   - HTTP core, API clients, session store    │
//! │  core       - ApiError / AppError, DealDeskService     │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTPS + Bearer token         │ HTTPS
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  ForexKing API  │          │   Contact endpoint      │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Headless page state; outcomes surface as toasts
//! - **widgets**: Presentation logic for the smaller components
//! - **services**: `api` (request core and endpoint clients) and `session`
//!   (token persistence)
//! - **core**: Error types and the service trait
//! - **config**: Environment-driven client configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dealdesk::app::DealPerformance;
//! use dealdesk::config::ClientConfig;
//! use dealdesk::services::api::ApiClient;
//! use dealdesk::services::session::FileSessionStore;
//!
//! # async fn run() -> dealdesk::core::Result<()> {
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//!
//! let store = Arc::new(FileSessionStore::open(&config.session_file));
//! let api = Arc::new(ApiClient::new(&config, store));
//!
//! let mut deals = DealPerformance::new(api);
//! deals.load_deals().await?;
//! println!("Total profit: {}", deals.total_profit());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod widgets;

#[cfg(test)]
mod test_support;

pub use crate::config::ClientConfig;
pub use crate::core::{ApiError, AppError, DealDeskService, Result};
pub use crate::services::api::ApiClient;
pub use crate::services::session::{FileSessionStore, MemorySessionStore, SessionStore};
