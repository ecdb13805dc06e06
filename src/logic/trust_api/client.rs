//! Trust API Client
//!
//! HTTP client for the TRUSTSCOPE trust-assessment service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::types::{AssessmentRequest, AuditEntry, HealthResponse};
use crate::constants;
use crate::error::{ConfigError, TransportError};
use crate::logic::verdict::AssessmentResult;

/// Trust service configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, without the API base path
    pub server_url: String,
    /// `None` never times out
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: constants::get_server_url(),
            timeout_seconds: constants::get_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// `{server_url}/api/{path}`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.server_url.trim_end_matches('/'),
            constants::API_BASE_PATH,
            path
        )
    }
}

/// Remote trust-assessment operations
#[async_trait]
pub trait TrustApi: Send + Sync {
    /// Single attempt, no retry
    async fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResult, TransportError>;

    async fn health(&self) -> Result<HealthResponse, TransportError>;

    async fn recent_logs(&self, limit: usize) -> Result<Vec<AuditEntry>, TransportError>;
}

/// reqwest-backed [`TrustApi`]
pub struct HttpTrustClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl HttpTrustClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if !config.server_url.starts_with("http://") && !config.server_url.starts_with("https://") {
            return Err(ConfigError::InvalidServerUrl {
                url: config.server_url,
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("trustscope-dashboard/{}", constants::APP_VERSION));
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl TrustApi for HttpTrustClient {
    async fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResult, TransportError> {
        let url = self.config.endpoint("assess");
        let request_id = Uuid::new_v4();

        log::info!("Requesting trust assessment [{}]: {}", request_id, url);

        let response = self.http_client
            .post(&url)
            .header("X-Request-ID", request_id.to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;

        // Any JSON body is taken as the verdict, whatever the status
        if !status.is_success() {
            log::warn!("Assessment [{}] returned {} with a JSON body; displaying it as-is", request_id, status.as_u16());
        }

        let result = AssessmentResult::from_value(&body);
        log::info!(
            "Trust analysis received [{}]: {} (score: {})",
            request_id,
            result.trust.trust_label.as_deref().unwrap_or("-"),
            result.trust.trust_score
        );
        Ok(result)
    }

    async fn health(&self) -> Result<HealthResponse, TransportError> {
        let url = self.config.endpoint("health");

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if response.status().is_success() {
            response.json().await
                .map_err(|e| TransportError::MalformedBody(e.to_string()))
        } else {
            Err(TransportError::Server(response.status().as_u16()))
        }
    }

    async fn recent_logs(&self, limit: usize) -> Result<Vec<AuditEntry>, TransportError> {
        let url = self.config.endpoint("logs");

        let response = self.http_client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Server(response.status().as_u16()));
        }

        let entries: Vec<Value> = response.json().await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
        Ok(entries.iter().map(AuditEntry::from_value).collect())
    }
}
