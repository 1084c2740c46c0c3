//! # API Client Tests
//!
//! Every test runs the real `ApiClient` against an in-process stub server.

mod client;
mod deals;
