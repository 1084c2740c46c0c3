//! # Dashboard Controllers
//!
//! Headless state for the dashboard pages. Each controller talks to the API
//! through [`DealDeskService`](crate::core::DealDeskService) and reports
//! outcomes as [`Toast`]s.

pub mod auth;
pub mod deals;
pub mod export;
pub mod notifications;
pub mod reports;

pub use auth::AuthController;
pub use deals::DealPerformance;
pub use export::{safe_filename, ExportedFile};
pub use notifications::{Notifications, Toast, ToastVariant};
pub use reports::{display_created_at, export_filename, ReportsView};
