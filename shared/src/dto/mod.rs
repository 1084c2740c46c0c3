//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the ForexKing REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Sign-up, sign-in, user identity and error bodies
//! - [`deals`] - Deal records
//! - [`reports`] - Reports and export formats
//! - [`contact`] - Contact form message
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/users/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": { "id": "u1", "name": "Alice", "email": "alice@example.com" },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod contact;
pub mod deals;
pub mod reports;

pub use auth::*;
pub use contact::*;
pub use deals::*;
pub use reports::*;
