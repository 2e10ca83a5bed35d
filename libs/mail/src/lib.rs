//! Single-endpoint mail dispatch: decode a send request, render a named
//! HTML template, and deliver through the configured outbound transport.
//!
//! ## Components
//!
//! - **Models**: [`SendRequest`], [`Address`], [`Envelope`]
//! - **Templates**: file-backed, strict-mode [`TemplateEngine`]
//! - **Transports**: [`MailTransport`] with HTTP-API, SMTP and mock
//!   implementations, exactly one active per process
//! - **Service**: [`MailService`], the decode → render → envelope →
//!   transmit pipeline behind `POST /send`
//!
//! ## Usage
//!
//! ```ignore
//! use mail::{handlers, HttpApiTransport, MailService, TemplateEngine};
//! use std::sync::Arc;
//!
//! let templates = TemplateEngine::new("/etc/smailer/templates");
//! let transport = Arc::new(HttpApiTransport::new(token));
//! let router = handlers::router(MailService::new(templates, transport));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod templates;
pub mod transport;

pub use error::{MailError, MailResult, TransportError};
pub use models::{Address, Envelope, SendRequest};
pub use service::MailService;
pub use templates::TemplateEngine;
pub use transport::{HttpApiTransport, MailTransport, MockTransport, SmtpConfig, SmtpTransport};
