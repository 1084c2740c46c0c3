//! # File Upload Dialog
//!
//! Selection and drag-and-drop state for the daily deals upload. Submitting
//! goes through [`ReportsView::upload_daily_deals`](crate::app::ReportsView::upload_daily_deals).

use std::path::Path;

use shared::format_file_size;

use crate::app::notifications::Notifications;
use crate::app::ReportsView;
use crate::core::error::{AppError, Result};

pub const INVALID_FILE_MESSAGE: &str = "Please upload a PDF, Excel, or CSV file.";

/// A file offered for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Describe a local file, inferring the MIME type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::Validation(format!("Not a file: {}", path.display())))?;
        let mime_type = mime_for_extension(path).to_string();

        Ok(Self::new(name, mime_type, metadata.len()))
    }

    /// PDF, anything spreadsheet-like, or a `.csv` name.
    pub fn is_accepted(&self) -> bool {
        self.mime_type == "application/pdf"
            || self.mime_type.contains("sheet")
            || self.name.ends_with(".csv")
    }

    pub fn size_label(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Drag hover, selected file and the submit step.
#[derive(Debug, Default)]
pub struct UploadDialog {
    selected: Option<UploadCandidate>,
    drag_active: bool,
    pub notifications: Notifications,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn drop_file(&mut self, file: UploadCandidate) -> bool {
        self.drag_active = false;
        self.select(file)
    }

    /// Select `file` if its type is accepted; otherwise keep the previous selection.
    pub fn select(&mut self, file: UploadCandidate) -> bool {
        if file.is_accepted() {
            self.selected = Some(file);
            true
        } else {
            tracing::debug!(name = %file.name, mime = %file.mime_type, "Rejected upload");
            self.notifications
                .error("Invalid File Type", INVALID_FILE_MESSAGE);
            false
        }
    }

    pub fn selected(&self) -> Option<&UploadCandidate> {
        self.selected.as_ref()
    }

    pub fn remove(&mut self) {
        self.selected = None;
    }

    /// Upload the selection; it is cleared only when the upload succeeds.
    pub async fn submit(&mut self, reports: &mut ReportsView) -> bool {
        let Some(file) = self.selected.clone() else {
            return false;
        };

        if reports.upload_daily_deals(&file).await.is_some() {
            self.selected = None;
            true
        } else {
            false
        }
    }
}
