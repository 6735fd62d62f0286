//! SMS gateway client
//!
//! HTTP client for the Eskiz SMS gateway with retry logic and exponential
//! backoff. Phone numbers are masked in every log line.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use vg_core::services::classifier::mask_identifier;

use crate::InfrastructureError;

/// SMS gateway configuration
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Gateway base URL
    pub base_url: String,
    /// Bearer token for the gateway API
    pub api_token: String,
    /// Sender name registered with the gateway
    pub from: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl SmsConfig {
    /// Read from `SMS_API_URL`, `SMS_API_TOKEN` and `SMS_FROM`; `None` when
    /// the token is unset so callers can fall back to the mock dispatcher.
    pub fn from_env() -> Option<Result<Self, InfrastructureError>> {
        let api_token = std::env::var("SMS_API_TOKEN").ok()?;
        Some(Ok(Self {
            base_url: std::env::var("SMS_API_URL")
                .unwrap_or_else(|_| "https://notify.eskiz.uz/api".to_string()),
            api_token,
            from: std::env::var("SMS_FROM").unwrap_or_else(|_| "4546".to_string()),
            max_retries: std::env::var("SMS_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("SMS_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }))
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
    #[allow(dead_code)]
    status: Option<String>,
}

/// Eskiz SMS gateway client.
pub struct EskizSmsClient {
    http: reqwest::Client,
    config: SmsConfig,
}

impl EskizSmsClient {
    pub fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        info!(base_url = %config.base_url, "SMS gateway client initialized");
        Ok(Self { http, config })
    }

    /// Send an SMS with retry logic. Returns the gateway message id.
    pub async fn send(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_identifier(to)
            );

            match self.send_once(to, message).await {
                Ok(message_id) => {
                    info!(
                        "SMS sent to {} with id {}",
                        mask_identifier(to),
                        message_id
                    );
                    return Ok(message_id);
                }
                Err(e) if attempts < self.config.max_retries && is_retriable(&e) => {
                    warn!(
                        "SMS send failed (attempt {}/{}): {}. Retrying in {:?}...",
                        attempts, self.config.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    error!(
                        "SMS send failed after {} attempts: {}",
                        attempts, e
                    );
                    return Err(e);
                }
            }
        }
    }

    async fn send_once(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let url = format!("{}/message/sms/send", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&serde_json::json!({
                "mobile_phone": to,
                "message": message,
                "from": self.config.from,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::Sms(format!(
                "gateway returned HTTP {}",
                status
            )));
        }

        let body: SendResponse = response.json().await?;
        Ok(body.id.unwrap_or_else(|| "unknown".to_string()))
    }
}

fn is_retriable(error: &InfrastructureError) -> bool {
    match error {
        InfrastructureError::Http(e) => e.is_timeout() || e.is_connect(),
        InfrastructureError::Sms(message) => {
            message.contains("429") || message.contains("HTTP 5")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retriable_classification() {
        assert!(is_retriable(&InfrastructureError::Sms(
            "gateway returned HTTP 503".to_string()
        )));
        assert!(is_retriable(&InfrastructureError::Sms(
            "gateway returned HTTP 429".to_string()
        )));
        assert!(!is_retriable(&InfrastructureError::Sms(
            "gateway returned HTTP 400".to_string()
        )));
        assert!(!is_retriable(&InfrastructureError::Config(
            "missing token".to_string()
        )));
    }
}
