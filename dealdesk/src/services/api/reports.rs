//! # Report Endpoints
//!
//! Listing, generation and binary export of reports.

use serde_json::Value;
use shared::{ExportFormat, GenerateReportRequest, Report};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::ApiError;

pub const REPORTS_PATH: &str = "/reports";
pub const GENERATE_REPORT_PATH: &str = "/reports/generate";
pub const DEALS_EXPORT_PATH: &str = "/reports/deals/export";

/// List all reports.
#[tracing::instrument(skip(client))]
pub async fn get_reports(client: &ApiClient) -> Result<Vec<Report>, ApiError> {
    client.request(REPORTS_PATH, RequestOptions::get()).await
}

/// Ask the server to generate a report of `kind`.
#[tracing::instrument(skip(client, filters))]
pub async fn generate_report(
    client: &ApiClient,
    kind: &str,
    filters: Option<Value>,
) -> Result<Report, ApiError> {
    let request = GenerateReportRequest {
        kind: kind.to_string(),
        filters,
    };

    client
        .request(GENERATE_REPORT_PATH, RequestOptions::post().json(&request)?)
        .await
}

/// Download a report file.
#[tracing::instrument(skip(client), fields(format = %format))]
pub async fn export_report(
    client: &ApiClient,
    report_id: &str,
    format: ExportFormat,
) -> Result<Vec<u8>, ApiError> {
    let path = format!("{}/{}/export", REPORTS_PATH, report_id);
    client
        .request_bytes(&path, RequestOptions::get().query("format", format.as_str()))
        .await
}

/// Download the deals report; `filters` travel as a JSON string query parameter.
#[tracing::instrument(skip(client, filters), fields(format = %format))]
pub async fn export_deals_report(
    client: &ApiClient,
    filters: Option<Value>,
    format: ExportFormat,
) -> Result<Vec<u8>, ApiError> {
    let mut options = RequestOptions::get().query("format", format.as_str());
    if let Some(filters) = filters {
        options = options.query("filters", filters.to_string());
    }

    client.request_bytes(DEALS_EXPORT_PATH, options).await
}
