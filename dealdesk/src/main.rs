use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use dealdesk::cli::{self, Args};
use dealdesk::config::ClientConfig;
use dealdesk::logging::{self, LogConfig};
use dealdesk::services::api::ApiClient;
use dealdesk::services::session::FileSessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let _log_guard = logging::init(&LogConfig::from_env());
    let args = Args::parse();

    let config = match ClientConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(api = %config.api_base_url, session = %config.session_file.display(), "Starting");

    let store = Arc::new(FileSessionStore::open(&config.session_file));
    let api = Arc::new(ApiClient::new(&config, store));

    match cli::run(args, api, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
