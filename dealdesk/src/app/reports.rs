//! # Reports View
//!
//! Report listing, per-report export and the daily deals upload.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use lib_utils::{date_stamp, format_display, parse_utc};
use serde_json::json;
use shared::{underscore_whitespace, ExportFormat, Report};

use super::export::{safe_filename, ExportedFile};
use super::notifications::Notifications;
use crate::core::error::ApiError;
use crate::core::service::DealDeskService;
use crate::widgets::upload::UploadCandidate;

/// Report type the server files daily deal uploads under.
pub const DAILY_DEALS_REPORT: &str = "daily_deals";

pub struct ReportsView {
    service: Arc<dyn DealDeskService>,
    reports: Vec<Report>,
    loading: bool,
    exporting: HashSet<String>,
    pub notifications: Notifications,
}

impl ReportsView {
    pub fn new(service: Arc<dyn DealDeskService>) -> Self {
        Self {
            service,
            reports: Vec::new(),
            loading: false,
            exporting: HashSet::new(),
            notifications: Notifications::new(),
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn find(&self, report_id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == report_id)
    }

    pub fn is_exporting(&self, report_id: &str) -> bool {
        self.exporting.contains(report_id)
    }

    pub async fn load_reports(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.service.get_reports().await;
        self.loading = false;

        match result {
            Ok(reports) => {
                self.reports = reports;
                Ok(())
            }
            Err(e) => {
                self.notifications
                    .error("Failed to load reports", e.message.clone());
                Err(e)
            }
        }
    }

    /// Download one report as CSV, named after its title and `today`.
    pub async fn export_report(
        &mut self,
        report_id: &str,
        title: &str,
        today: NaiveDate,
    ) -> Option<ExportedFile> {
        self.export_report_as(report_id, title, today, ExportFormat::Csv)
            .await
    }

    pub async fn export_report_as(
        &mut self,
        report_id: &str,
        title: &str,
        today: NaiveDate,
        format: ExportFormat,
    ) -> Option<ExportedFile> {
        self.exporting.insert(report_id.to_string());
        let result = self.service.export_report(report_id, format).await;
        self.exporting.remove(report_id);

        match result {
            Ok(bytes) => {
                self.notifications.success(
                    "Export Successful",
                    format!("Report \"{}\" has been downloaded.", title),
                );
                Some(ExportedFile::new(export_filename(title, today, format), bytes))
            }
            Err(e) => {
                self.notifications.error("Export Failed", e.message);
                None
            }
        }
    }

    /// File a daily deals upload as a generated report.
    ///
    /// Only file metadata is sent; the API takes no file payload on this endpoint.
    pub async fn upload_daily_deals(&mut self, file: &UploadCandidate) -> Option<Report> {
        let filters = json!({
            "filename": file.name,
            "mimeType": file.mime_type,
            "size": file.size_bytes,
        });

        match self
            .service
            .generate_report(DAILY_DEALS_REPORT, Some(filters))
            .await
        {
            Ok(report) => {
                self.notifications.success(
                    "File Uploaded",
                    "Daily deals file has been uploaded successfully to reports.",
                );
                self.reports.push(report.clone());
                Some(report)
            }
            Err(e) => {
                self.notifications.error("Upload Failed", e.message);
                None
            }
        }
    }
}

/// `<title with whitespace runs as _>_<YYYY-MM-DD>.<ext>`, safe to use as a file name.
pub fn export_filename(title: &str, today: NaiveDate, format: ExportFormat) -> String {
    safe_filename(&format!(
        "{}_{}.{}",
        underscore_whitespace(title),
        date_stamp(today),
        format.extension()
    ))
}

/// Render a report's `createdAt`; unparseable values are shown as-is.
pub fn display_created_at(report: &Report) -> String {
    parse_utc(&report.created_at)
        .map(format_display)
        .unwrap_or_else(|_| report.created_at.clone())
}
