//! Error handling

use thiserror::Error;

/// Failure talking to the trust-assessment service.
///
/// These are terminal at the controller boundary: they become a user notice
/// and never reach the visualizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Server error: {0}")]
    Server(u16),
}

/// Unknown feature reference at the command line boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeatureError {
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("expected '<feature>=<value>', got '{0}'")]
    BadAssignment(String),
}

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
