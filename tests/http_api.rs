use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::FixedOffset;
use ledger_chat_bot::{
    app::{AppState, router},
    middleware::signature::{SIGNATURE_HEADER, sign},
    models::message::OutboundReply,
    services::ledger_service::{Ledger, SystemClock},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(secret: Option<&str>) -> Router {
    let ledger = Ledger::new(
        Arc::new(SystemClock),
        FixedOffset::east_opt(7 * 3600).unwrap(),
    );
    router(AppState::new(ledger, secret.map(str::to_string)))
}

fn message_request(body: &Value, signature: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/messages")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_is_plain_liveness_text() {
    let response = app(None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK - WA Bot Keuangan running");
}

#[tokio::test]
async fn health_reports_account_count() {
    let app = app(None);

    let body = json!({ "sender_id": "62811", "text": "/saldo" });
    let response = app
        .clone()
        .oneshot(message_request(&body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: Value = read_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["accounts"], 1);
}

#[tokio::test]
async fn message_round_trip_returns_reply() {
    let app = app(None);

    let body = json!({ "sender_id": "62811", "text": "/masuk 5000000 gaji" });
    let response = app
        .clone()
        .oneshot(message_request(&body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reply: OutboundReply = read_json(response).await;
    assert_eq!(
        reply.reply.as_deref(),
        Some("✅ + Rp 5.000.000 (gaji)\nSaldo: Rp 5.000.000")
    );

    let body = json!({ "sender_id": "62811", "text": "apa kabar" });
    let response = app.oneshot(message_request(&body, None)).await.unwrap();
    let reply: OutboundReply = read_json(response).await;
    assert_eq!(reply, OutboundReply { reply: None });
}

#[tokio::test]
async fn own_messages_are_ignored() {
    let body = json!({ "sender_id": "62811", "text": "/saldo", "from_me": true });
    let response = app(None)
        .oneshot(message_request(&body, None))
        .await
        .unwrap();

    let reply: OutboundReply = read_json(response).await;
    assert_eq!(reply.reply, None);
}

#[tokio::test]
async fn blank_sender_is_bad_request() {
    let body = json!({ "sender_id": "  ", "text": "/saldo" });
    let response = app(None)
        .oneshot(message_request(&body, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = read_json(response).await;
    assert_eq!(error["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn signed_request_is_accepted() {
    let body = json!({ "sender_id": "62811", "text": "/histori" });
    let signature = sign("rahasia", body.to_string().as_bytes()).unwrap();

    let response = app(Some("rahasia"))
        .oneshot(message_request(&body, Some(signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: OutboundReply = read_json(response).await;
    assert_eq!(reply.reply.as_deref(), Some("Belum ada transaksi."));
}

#[tokio::test]
async fn missing_or_wrong_signature_is_unauthorized() {
    let body = json!({ "sender_id": "62811", "text": "/masuk 1000" });

    let response = app(Some("rahasia"))
        .oneshot(message_request(&body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let forged = sign("bukan-rahasia", body.to_string().as_bytes()).unwrap();
    let response = app(Some("rahasia"))
        .oneshot(message_request(&body, Some(forged)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error: Value = read_json(response).await;
    assert_eq!(error["error"]["code"], "invalid_signature");
}

#[tokio::test]
async fn health_does_not_require_signature() {
    let response = app(Some("rahasia"))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
