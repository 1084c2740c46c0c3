//! # ForexKing API Client Module
//!
//! HTTP client for the ForexKing REST API: authentication, deals, reports and
//! the contact form.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, RequestOptions, the request/error policy
//! ├── auth.rs     - Sign-up, sign-in, sign-out, local session state
//! ├── deals.rs    - Deal CRUD
//! ├── reports.rs  - Report listing, generation and export
//! └── contact.rs  - Contact form submission
//! ```
//!
//! ## Endpoints
//!
//! | Call | Method | Path |
//! |---|---|---|
//! | sign up | POST | `/api/v1/users/signup` |
//! | sign in | POST | `/api/v1/users/login` |
//! | sign out | POST | `/auth/signout` |
//! | list / create deal | GET / POST | `/deals` |
//! | update / delete deal | PUT / DELETE | `/deals/{id}` |
//! | list reports | GET | `/reports` |
//! | generate report | POST | `/reports/generate` |
//! | export report | GET | `/reports/{id}/export?format=` |
//! | export deals report | GET | `/reports/deals/export?format=&filters=` |

pub mod auth;
pub mod client;
pub mod contact;
pub mod deals;
pub mod reports;

#[cfg(test)]
mod tests;

pub use auth::{unverified_local_user, SessionState};
pub use client::{status_message, ApiClient, RequestOptions};
