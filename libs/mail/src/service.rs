//! Mail dispatch pipeline.

use crate::error::{MailError, MailResult};
use crate::models::{Address, Envelope, SendRequest};
use crate::templates::TemplateEngine;
use crate::transport::MailTransport;
use std::sync::Arc;
use tracing::{debug, info};

/// Coordinates one send operation: decode, render, envelope, transmit.
///
/// Holds no per-request state; concurrent requests share it freely.
pub struct MailService {
    templates: TemplateEngine,
    transport: Arc<dyn MailTransport>,
}

impl MailService {
    pub fn new(templates: TemplateEngine, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            templates,
            transport,
        }
    }

    /// Decode a raw request body and dispatch the resulting message.
    ///
    /// Decoding tolerates absent and unknown fields; only malformed JSON
    /// fails here.
    pub async fn dispatch(&self, body: &[u8]) -> MailResult<()> {
        let request: SendRequest =
            serde_json::from_slice(body).map_err(|e| MailError::Decode(e.to_string()))?;

        self.send(request).await
    }

    /// Render the named template and hand the envelope to the transport.
    pub async fn send(&self, request: SendRequest) -> MailResult<()> {
        debug!(
            template = %request.template,
            to = %request.to,
            "Rendering message"
        );

        let html = self
            .templates
            .render(&request.template, &request.values)
            .await?;

        let envelope = Envelope {
            from: Address::bare(request.from),
            to: vec![Address::bare(request.to)],
            subject: request.subject,
            html,
        };

        self.transport.send(&envelope).await?;

        info!(
            transport = self.transport.name(),
            subject = %envelope.subject,
            "Message dispatched"
        );

        Ok(())
    }
}
