//! Request and response bodies exchanged with the messaging gateway.

use serde::{Deserialize, Serialize};

/// Inbound event forwarded by the messaging gateway.
///
/// # JSON Example
///
/// ```json
/// {
///   "sender_id": "6281234567890@s.whatsapp.net",
///   "text": "/masuk 5000000 gaji"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    /// Opaque identifier of the conversation participant
    pub sender_id: String,

    /// Plain-text body of the message
    #[serde(default)]
    pub text: String,

    /// Set when the gateway forwards the bot's own messages; those are ignored
    #[serde(default)]
    pub from_me: bool,
}

/// Reply for the gateway to deliver back to the sender.
///
/// `reply` is `null` when nothing should be sent.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundReply {
    pub reply: Option<String>,
}
