//! # Client Configuration
//!
//! Configuration loaded from environment variables (a `.env` file is honoured
//! when the binary calls `dotenvy::dotenv()` first). Validated on startup to
//! fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `FOREXKING_API_URL` | `https://api.forexking.info` |
//! | `FOREXKING_CONTACT_URL` | `https://forex-orcin.vercel.app/contact` |
//! | `FOREXKING_SESSION_FILE` | `data/session.json` |
//! | `FOREXKING_DOWNLOAD_DIR` | `.` |
//! | `FOREXKING_HTTP_TIMEOUT_SECS` | unset (transport default) |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_opt_parse, get_env_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "https://api.forexking.info";
pub const DEFAULT_CONTACT_URL: &str = "https://forex-orcin.vercel.app/contact";

/// Dashboard client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every API path is appended to
    pub api_base_url: String,

    /// Absolute URL the contact form posts to
    pub contact_url: String,

    /// JSON file holding the persisted session token
    pub session_file: PathBuf,

    /// Directory exported files are saved into
    pub download_dir: PathBuf,

    /// Whole-request timeout; `None` leaves the transport default in place
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            session_file: PathBuf::from("data/session.json"),
            download_dir: PathBuf::from("."),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let timeout_secs: Option<u64> = get_env_opt_parse("FOREXKING_HTTP_TIMEOUT_SECS")?;

        Ok(Self {
            api_base_url: get_env_or("FOREXKING_API_URL", DEFAULT_API_URL),
            contact_url: get_env_or("FOREXKING_CONTACT_URL", DEFAULT_CONTACT_URL),
            session_file: PathBuf::from(get_env_or("FOREXKING_SESSION_FILE", "data/session.json")),
            download_dir: PathBuf::from(get_env_or("FOREXKING_DOWNLOAD_DIR", ".")),
            request_timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("FOREXKING_API_URL", &self.api_base_url),
            ("FOREXKING_CONTACT_URL", &self.contact_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{} must start with http:// or https://, got {}",
                    name, url
                )));
            }
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config(
                "FOREXKING_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let config = ClientConfig {
            api_base_url: "ftp://api.forexking.info".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
