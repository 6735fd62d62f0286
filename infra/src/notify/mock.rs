//! Mock dispatcher
//!
//! Records messages instead of sending them and prints them to the console,
//! so full flows can be exercised without SMTP or SMS credentials.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::info;

use vg_core::domain::entities::challenge::Channel;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::classifier::mask_identifier;

/// A message captured by the mock dispatcher.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel: Channel,
    pub to: String,
    pub subject: Option<String>,
    pub body: String,
}

pub struct MockDispatcher {
    messages: Mutex<Vec<SentMessage>>,
    counter: AtomicUsize,
    fail: AtomicBool,
    /// Print full message bodies to stdout (development convenience)
    console_output: bool,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            console_output: false,
        }
    }

    /// A mock that prints every message body to the console.
    pub fn with_console_output() -> Self {
        Self {
            console_output: true,
            ..Self::new()
        }
    }

    /// Make every subsequent send fail.
    pub fn simulate_failure(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// All recorded messages.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.messages.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.messages.lock().await.len()
    }

    /// Extract the 4-digit code from the most recent message body.
    pub async fn last_code(&self) -> Option<String> {
        let messages = self.messages.lock().await;
        let body = &messages.last()?.body;
        body.split_whitespace()
            .find(|w| w.len() == 4 && w.chars().all(|c| c.is_ascii_digit()))
            .map(|w| w.to_string())
    }

    async fn record(&self, message: SentMessage) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("mock dispatcher failure".to_string());
        }
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            channel = %message.channel,
            to = %mask_identifier(&message.to),
            "mock dispatch recorded"
        );
        if self.console_output {
            println!(
                "[mock {}] to={} subject={:?}\n{}",
                message.channel, message.to, message.subject, message.body
            );
        }
        self.messages.lock().await.push(message);
        Ok(format!("mock-{}", id))
    }
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDispatcher for MockDispatcher {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        self.record(SentMessage {
            channel: Channel::Email,
            to: to.to_string(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
        })
        .await
    }

    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String> {
        self.record(SentMessage {
            channel: Channel::Phone,
            to: to.to_string(),
            subject: None,
            body: body.to_string(),
        })
        .await
    }
}
