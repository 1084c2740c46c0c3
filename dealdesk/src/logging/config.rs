//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "dealdesk=info,warn";
pub const LOG_FILE_NAME: &str = "dealdesk.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives (e.g., "dealdesk=debug,info")
    pub filter: String,
    /// Directory for the daily-rotated log file; stderr only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from `RUST_LOG` and `FOREXKING_LOG_DIR`
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("FOREXKING_LOG_DIR").ok(),
        )
    }

    fn from_vars(filter: Option<String>, log_dir: Option<String>) -> Self {
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: log_dir.filter(|d| !d.trim().is_empty()).map(PathBuf::from),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.filter.contains("debug") || self.filter.contains("trace")
    }

    /// Full path of the current log file, if file logging is on
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }
}
