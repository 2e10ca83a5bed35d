//! SMTP relay transport using lettre.

use super::MailTransport;
use crate::error::TransportError;
use crate::models::{Address, Envelope};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, error, info};

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host.
    pub host: String,
    /// Relay port.
    pub port: u16,
    /// Relay auth user.
    pub username: String,
    /// Relay auth password.
    pub password: String,
}

/// Authenticated SMTP relay transport.
///
/// Connections are dialed plain and upgraded with STARTTLS, the usual
/// posture for authenticated submission ports.
pub struct SmtpTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpTransport {
    /// Build the transport from relay settings.
    pub fn new(config: &SmtpConfig) -> Result<Self, TransportError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
            port: config.port,
        })
    }

    /// Build a lettre message carrying the envelope as a `text/html` body.
    fn build_message(envelope: &Envelope) -> Result<Message, TransportError> {
        let mut builder = Message::builder()
            .from(mailbox(&envelope.from)?)
            .subject(&envelope.subject);

        for recipient in &envelope.to {
            builder = builder.to(mailbox(recipient)?);
        }

        let message = builder.singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(envelope.html.clone()),
        )?;

        Ok(message)
    }
}

fn mailbox(address: &Address) -> Result<Mailbox, TransportError> {
    let email: lettre::Address = address.email.parse()?;
    let name = if address.name.is_empty() {
        None
    } else {
        Some(address.name.clone())
    };
    Ok(Mailbox::new(name, email))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        debug!(
            subject = %envelope.subject,
            recipients = envelope.to.len(),
            host = %self.host,
            port = self.port,
            "Sending message via SMTP"
        );

        let message = Self::build_message(envelope)?;

        self.transport.send(message).await.map_err(|e| {
            error!(host = %self.host, error = %e, "SMTP send failed");
            TransportError::from(e)
        })?;

        info!(subject = %envelope.subject, "Message sent via SMTP");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
