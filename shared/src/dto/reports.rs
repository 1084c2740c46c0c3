use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-generated report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque report payload
    #[serde(default)]
    pub data: Value,
    pub created_at: String,
}

/// Body of `POST /reports/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateReportRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

/// Export file format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
}

impl ExportFormat {
    /// Value of the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
        }
    }

    /// File extension used when saving an export.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_field_maps_to_kind() {
        let report: Report = serde_json::from_str(
            r#"{"id":"r1","title":"Weekly","type":"deals","data":{"rows":3},"createdAt":"2024-01-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(report.kind, "deals");
        assert_eq!(report.data["rows"], 3);
    }

    #[test]
    fn test_generate_request_without_filters() {
        let request = GenerateReportRequest {
            kind: "daily_deals".to_string(),
            filters: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"type":"daily_deals"}"#
        );
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default().as_str(), "csv");
    }
}
