//! # Authentication Library
//!
//! Client-side bearer-token handling. Tokens are issued and verified by the
//! ForexKing API; this crate only reads their payload for display purposes.

pub mod token;

// Re-export commonly used types
pub use token::{decode_unverified, TokenError, UnverifiedClaims};
