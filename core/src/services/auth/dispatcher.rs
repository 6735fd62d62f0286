//! Notification dispatcher interface

use async_trait::async_trait;

/// Outbound delivery of verification codes.
///
/// One long-lived dispatcher is constructed at startup and shared via `Arc`;
/// implementations return a provider message id on success. Errors are
/// stringly typed to keep the interface provider-agnostic.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send an email. Returns a message id.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;

    /// Send an SMS. Returns a message id.
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String>;
}
