//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default trust service location, only edit this file.

/// Default TRUSTSCOPE server URL
///
/// Fallback when `TRUSTSCOPE_SERVER_URL` is not set.
/// The API lives under [`API_BASE_PATH`] on this host.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Fixed API base path. Not configurable.
pub const API_BASE_PATH: &str = "/api";

/// Default number of audit entries fetched by `logs`
pub const DEFAULT_LOG_LIMIT: usize = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "TRUSTSCOPE";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get server URL from environment or use default
pub fn get_server_url() -> String {
    std::env::var("TRUSTSCOPE_SERVER_URL")
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Get request timeout from environment.
///
/// `None` (the default) means requests never time out.
pub fn get_timeout_secs() -> Option<u64> {
    std::env::var("TRUSTSCOPE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
}

/// Get audit log fetch limit from environment or use default
pub fn get_log_limit() -> usize {
    std::env::var("TRUSTSCOPE_LOG_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LOG_LIMIT)
}
