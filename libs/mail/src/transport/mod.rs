//! Outbound mail transports.

pub mod api;
pub mod mock;
pub mod smtp;

pub use api::HttpApiTransport;
pub use mock::MockTransport;
pub use smtp::{SmtpConfig, SmtpTransport};

use crate::error::TransportError;
use crate::models::Envelope;
use async_trait::async_trait;

/// Outbound delivery channel for rendered messages.
///
/// Exactly one implementation is active per process, chosen at startup
/// from the configuration.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Hand the envelope to the underlying delivery mechanism.
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError>;

    /// Short transport identifier for logs.
    fn name(&self) -> &'static str;
}
