//! # Service Traits
//!
//! The dashboard's view of the remote API, as a trait so controllers can be
//! driven by fakes in tests.

use async_trait::async_trait;
use serde_json::Value;
use shared::{ContactMessage, Deal, DealUpdate, ExportFormat, NewDeal, Report, User};

use super::error::ApiError;

/// Every remote operation the dashboard performs.
///
/// Each method maps to exactly one HTTP call (except [`current_user`], which
/// never touches the network) and fails with the [`ApiError`] produced by the
/// HTTP core, unchanged.
///
/// [`current_user`]: DealDeskService::current_user
#[async_trait]
pub trait DealDeskService: Send + Sync {
    /// Register and start a session
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError>;

    /// Log in and start a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ApiError>;

    /// End the session on the server, then drop the local token
    async fn sign_out(&self) -> Result<(), ApiError>;

    /// Identity claimed by the stored token, unverified
    fn current_user(&self) -> Option<User>;

    /// List all deals
    async fn get_deals(&self) -> Result<Vec<Deal>, ApiError>;

    /// Create a deal; the server assigns `id` and `status`
    async fn create_deal(&self, deal: &NewDeal) -> Result<Deal, ApiError>;

    /// Apply a partial update to a deal
    async fn update_deal(&self, id: &str, update: &DealUpdate) -> Result<Deal, ApiError>;

    /// Delete a deal
    async fn delete_deal(&self, id: &str) -> Result<(), ApiError>;

    /// List all reports
    async fn get_reports(&self) -> Result<Vec<Report>, ApiError>;

    /// Ask the server to generate a report
    async fn generate_report(&self, kind: &str, filters: Option<Value>) -> Result<Report, ApiError>;

    /// Download a report file
    async fn export_report(&self, report_id: &str, format: ExportFormat) -> Result<Vec<u8>, ApiError>;

    /// Download the deals report file
    async fn export_deals_report(
        &self,
        filters: Option<Value>,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError>;

    /// Send a landing-page contact message
    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError>;
}
