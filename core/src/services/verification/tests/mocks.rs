//! Shared test doubles for the verification and auth services

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::challenge::Channel;
use crate::services::auth::dispatcher::NotificationDispatcher;
use crate::services::verification::traits::{ChallengeRecord, ChallengeStore};

/// In-memory challenge store honoring TTLs via `Instant`.
///
/// A TTL of zero means the record is evicted immediately, which lets tests
/// exercise the store-eviction layer without sleeping.
#[derive(Default)]
pub(crate) struct InMemoryChallengeStore {
    entries: RwLock<HashMap<String, (ChallengeRecord, Instant)>>,
}

impl InMemoryChallengeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl ChallengeStore for InMemoryChallengeStore {
    async fn put(&self, key: &str, record: ChallengeRecord, ttl: Duration) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (record, Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<ChallengeRecord>, String> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((record, deadline)) if Instant::now() < *deadline => Ok(Some(record.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn consume_if_matches(&self, key: &str, code_hash: &str) -> Result<bool, String> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((record, deadline))
                if Instant::now() < *deadline && record.code_hash == code_hash =>
            {
                entries.remove(key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// A message captured by [`RecordingDispatcher`].
#[derive(Debug, Clone)]
pub(crate) struct SentMessage {
    pub channel: Channel,
    pub to: String,
    pub subject: Option<String>,
    pub body: String,
}

/// Dispatcher that records every message instead of sending it.
#[derive(Default)]
pub(crate) struct RecordingDispatcher {
    messages: Mutex<Vec<SentMessage>>,
    fail: AtomicBool,
}

impl RecordingDispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail.
    pub(crate) fn simulate_failure(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) async fn sent(&self) -> Vec<SentMessage> {
        self.messages.lock().await.clone()
    }

    pub(crate) async fn sent_count(&self) -> usize {
        self.messages.lock().await.len()
    }

    /// Extract the 4-digit code from the most recent message body.
    pub(crate) async fn last_code(&self) -> Option<String> {
        let messages = self.messages.lock().await;
        let body = &messages.last()?.body;
        body.split_whitespace()
            .find(|w| w.len() == 4 && w.chars().all(|c| c.is_ascii_digit()))
            .map(|w| w.to_string())
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated email failure".to_string());
        }
        let mut messages = self.messages.lock().await;
        messages.push(SentMessage {
            channel: Channel::Email,
            to: to.to_string(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
        });
        Ok(format!("email-{}", messages.len()))
    }

    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated sms failure".to_string());
        }
        let mut messages = self.messages.lock().await;
        messages.push(SentMessage {
            channel: Channel::Phone,
            to: to.to_string(),
            subject: None,
            body: body.to_string(),
        });
        Ok(format!("sms-{}", messages.len()))
    }
}
