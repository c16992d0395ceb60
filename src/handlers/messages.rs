//! Inbound message handler.
//!
//! `POST /api/v1/messages` is called by the messaging gateway for every text
//! message it receives. The response tells the gateway what, if anything, to
//! send back to the sender.

use crate::{
    app::AppState,
    error::AppError,
    models::message::{InboundMessage, OutboundReply},
};
use axum::{Json, extract::State};

/// Run one inbound message through the ledger.
///
/// # Request Body
///
/// ```json
/// {
///   "sender_id": "6281234567890@s.whatsapp.net",
///   "text": "/keluar 10000 pulsa"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "reply": "✅ - Rp 10.000 (pulsa)\nSisa: Rp 4.990.000" }
/// ```
///
/// `reply` is `null` for plain chat text and for the bot's own messages.
///
/// # Errors
///
/// - `InvalidRequest`: `sender_id` is blank
pub async fn receive_message(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> Result<Json<OutboundReply>, AppError> {
    if message.sender_id.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "sender_id must not be empty".to_string(),
        ));
    }

    if message.from_me {
        tracing::trace!(sender_id = %message.sender_id, "ignoring own message");
        return Ok(Json(OutboundReply { reply: None }));
    }

    let reply = state
        .ledger
        .handle_message(&message.sender_id, &message.text)?;

    Ok(Json(OutboundReply { reply }))
}
