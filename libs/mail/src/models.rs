//! Request and message models.

use serde::{Deserialize, Serialize};

/// Payload accepted by `POST /send`.
///
/// Decoding is deliberately permissive: absent fields fall back to their
/// defaults and unknown fields are ignored, so only malformed JSON is
/// rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SendRequest {
    /// Sender address.
    pub from: String,
    /// Single recipient address.
    pub to: String,
    pub subject: String,
    /// Logical template name, resolved as `<name>.html` inside the
    /// configured templates directory.
    pub template: String,
    /// Arbitrary structured data fed to the template.
    pub values: serde_json::Value,
}

/// Email address as carried on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub email: String,
    /// Display name; may be empty and is still serialized, which existing
    /// payload consumers expect.
    #[serde(default)]
    pub name: String,
}

impl Address {
    /// Address with an empty display name.
    pub fn bare(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: String::new(),
        }
    }
}

/// Fully rendered message handed to a transport.
///
/// Serializes directly to the transactional-email API payload shape:
/// `{"from":{...},"to":[{...}],"subject":...,"html":...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub from: Address,
    pub to: Vec<Address>,
    pub subject: String,
    /// Rendered HTML body.
    pub html: String,
}
