//! # Services Module
//!
//! External integrations:
//!
//! - [`api`]: the ForexKing REST API client
//! - [`session`]: where the bearer token is kept
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  app controllers / CLI                       │
//! │        │ DealDeskService                     │
//! │        ▼                                     │
//! │  ApiClient ──── reads/writes ───► SessionStore
//! └────────┼─────────────────────────────────────┘
//!          │ HTTPS/JSON
//!          ▼
//!   api.forexking.info
//! ```

pub mod api;
pub mod session;
