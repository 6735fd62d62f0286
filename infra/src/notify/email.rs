//! SMTP mailer

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, info};

use crate::InfrastructureError;

/// SMTP connection settings
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// From address for outbound mail
    pub from: String,
}

impl SmtpConfig {
    /// Read from `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`
    /// and `SMTP_FROM`; `None` when the host is unset so callers can fall
    /// back to the mock dispatcher.
    pub fn from_env() -> Option<Result<Self, InfrastructureError>> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(Self::from_env_with_host(host))
    }

    fn from_env_with_host(host: String) -> Result<Self, InfrastructureError> {
        let username = std::env::var("SMTP_USERNAME")
            .map_err(|_| InfrastructureError::Config("SMTP_USERNAME not set".to_string()))?;
        let password = std::env::var("SMTP_PASSWORD")
            .map_err(|_| InfrastructureError::Config("SMTP_PASSWORD not set".to_string()))?;
        let from = std::env::var("SMTP_FROM")
            .map_err(|_| InfrastructureError::Config("SMTP_FROM not set".to_string()))?;
        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587);
        Ok(Self {
            host,
            port,
            username,
            password,
            from,
        })
    }
}

/// Async SMTP mailer for verification codes.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.from.parse().map_err(|e| {
            InfrastructureError::Config(format!("Invalid SMTP_FROM address: {}", e))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Email(format!("SMTP relay setup failed: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(config.username, config.password))
            .build();

        info!(host = %config.host, port = config.port, "SMTP mailer initialized");
        Ok(Self { transport, from })
    }

    /// Send a plain-text email. Returns the SMTP reply code as a message id.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| InfrastructureError::Email(format!("Invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))?;

        debug!(subject = %subject, "sending email");
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| {
                error!("SMTP send failed: {}", e);
                InfrastructureError::Email(format!("SMTP send failed: {}", e))
            })?;

        Ok(response.code().to_string())
    }
}
