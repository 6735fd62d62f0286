//! Outbound notification delivery

pub mod email;
pub mod mock;
pub mod sms;

use async_trait::async_trait;
use tracing::warn;

use vg_core::services::auth::dispatcher::NotificationDispatcher;

use crate::InfrastructureError;
use email::{SmtpConfig, SmtpMailer};
use mock::MockDispatcher;
use sms::{EskizSmsClient, SmsConfig};

/// Production dispatcher with per-channel fallback.
///
/// Each channel uses its real provider when configured and falls back to the
/// shared mock otherwise, so a deployment with only SMTP credentials still
/// serves phone registrations in development.
pub struct NotificationService {
    mailer: Option<SmtpMailer>,
    sms: Option<EskizSmsClient>,
    fallback: MockDispatcher,
}

impl NotificationService {
    pub fn new(mailer: Option<SmtpMailer>, sms: Option<EskizSmsClient>) -> Self {
        Self {
            mailer,
            sms,
            fallback: MockDispatcher::with_console_output(),
        }
    }

    /// Build from the environment; missing provider credentials select the
    /// mock for that channel.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let mailer = match SmtpConfig::from_env() {
            Some(config) => Some(SmtpMailer::new(config?)?),
            None => {
                warn!("SMTP_HOST not set, email delivery falls back to mock dispatcher");
                None
            }
        };
        let sms = match SmsConfig::from_env() {
            Some(config) => Some(EskizSmsClient::new(config?)?),
            None => {
                warn!("SMS_API_TOKEN not set, SMS delivery falls back to mock dispatcher");
                None
            }
        };
        Ok(Self::new(mailer, sms))
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        match &self.mailer {
            Some(mailer) => mailer.send(to, subject, body).await.map_err(|e| e.to_string()),
            None => self.fallback.send_email(to, subject, body).await,
        }
    }

    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String> {
        match &self.sms {
            Some(client) => client.send(to, body).await.map_err(|e| e.to_string()),
            None => self.fallback.send_sms(to, body).await,
        }
    }
}
