//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! ForexKing REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Sign-up, sign-in and user DTOs
//!   - **[`dto::deals`]**: Deal records and their create/update payloads
//!   - **[`dto::reports`]**: Reports, report generation and export formats
//!   - **[`dto::contact`]**: Landing-page contact message
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The remote API speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`:
//! - `client_name` in Rust is `clientName` on the wire
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::deals::NewDeal;
//!
//! let deal = NewDeal {
//!     client_name: "Acme".to_string(),
//!     deal_type: "EUR/USD".to_string(),
//!     amount: 1000.0,
//!     profit: 50.0,
//!     date: "2024-01-01".to_string(),
//! };
//!
//! let json = serde_json::to_value(&deal).unwrap();
//! assert_eq!(json["clientName"], "Acme");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
