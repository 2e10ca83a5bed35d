//! Mock transport for tests.

use super::MailTransport;
use crate::error::TransportError;
use crate::models::Envelope;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Transport that records envelopes instead of delivering them.
pub struct MockTransport {
    sent: Arc<Mutex<Vec<Envelope>>>,
    failure: Option<TransportError>,
}

impl MockTransport {
    /// Transport that accepts every envelope.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Transport that rejects every envelope with `error`.
    pub fn failing(error: TransportError) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Some(error),
        }
    }

    /// All envelopes accepted so far.
    pub async fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().await.clone()
    }

    /// Number of envelopes accepted so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Whether any envelope was addressed to `email`.
    pub async fn was_sent_to(&self, email: &str) -> bool {
        self.sent
            .lock()
            .await
            .iter()
            .any(|envelope| envelope.to.iter().any(|a| a.email == email))
    }

    /// Forget all recorded envelopes.
    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.sent.lock().await.push(envelope.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
