use axum::http::{Method, StatusCode};
use oseberg_backend::domain::ledger::{LEDGER_HEADERS, MESSAGE_SEPARATOR};
use serde_json::json;

mod support;

use support::{CANNED_REPLY, TestApp, assert_error_response};

const EMAIL_COL: usize = 2;
const MESSAGE_COL: usize = 3;
const TYPE_COL: usize = 4;
const STATUS_COL: usize = 5;
const NOTES_COL: usize = 6;

fn contact(name: &str, email: &str, message: &str) -> serde_json::Value {
    json!({ "name": name, "email": email, "message": message })
}

#[tokio::test]
async fn contact_is_acknowledged_and_recorded() {
    let app = TestApp::new();

    let resp = app
        .json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "Need 2t makhana"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.data()["message"],
        "Your message has been received. We'll get back to you soon!"
    );

    let rows = app.ledger.snapshot();
    assert_eq!(rows[0], LEDGER_HEADERS.map(String::from).to_vec());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][EMAIL_COL], "asha@example.com");
    assert_eq!(rows[1][TYPE_COL], "contact");
    assert_eq!(rows[1][STATUS_COL], "New");
}

#[tokio::test]
async fn repeat_contacts_merge_into_one_row() {
    let app = TestApp::new();

    app.json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "first"))
        .await;
    app.json(Method::POST, "/api/contact", contact("Asha", " ASHA@example.com ", "second"))
        .await;

    let rows = app.ledger.snapshot();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][MESSAGE_COL], format!("first{MESSAGE_SEPARATOR}second"));
}

#[tokio::test]
async fn quote_mode_is_recorded_as_quote() {
    let app = TestApp::new();

    app.json(
        Method::POST,
        "/api/contact",
        json!({ "name": "Li", "email": "li@example.com", "message": "FOB price?", "mode": "quote" }),
    )
    .await;

    assert_eq!(app.ledger.snapshot()[1][TYPE_COL], "quote");
}

#[tokio::test]
async fn contact_requires_every_field() {
    let app = TestApp::new();

    let resp = app
        .json(Method::POST, "/api/contact", json!({ "name": "Li", "email": "li@example.com" }))
        .await;
    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Name, email, and message are required.");
    assert!(app.ledger.snapshot().is_empty());
}

#[tokio::test]
async fn contact_succeeds_without_a_ledger() {
    let app = TestApp::builder().without_ledger().build();

    let resp = app
        .json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "hello"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn chat_replies_and_keeps_conversation_apart_from_contact() {
    let app = TestApp::new();

    app.json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "hello"))
        .await;

    let resp = app
        .json(
            Method::POST,
            "/api/chat",
            json!({
                "message": "What do you export?",
                "conversationHistory": [{ "role": "user", "text": "Hi" }, { "role": "model", "text": "Hello!" }],
                "userEmail": "asha@example.com"
            }),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.data()["response"], CANNED_REPLY);

    let rows = app.ledger.snapshot();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][TYPE_COL], "contact");
    assert_eq!(rows[1][MESSAGE_COL], "hello");
    assert_eq!(rows[2][TYPE_COL], "chatbot");
    assert_eq!(rows[2][1], "Chat User");
    assert!(rows[2][MESSAGE_COL].contains("User: What do you export?"));
    assert!(rows[2][MESSAGE_COL].contains(&format!("Bot: {CANNED_REPLY}")));

    let prompt = app.generator.prompts().pop().unwrap();
    assert!(prompt.contains("What do you export?"));
    assert!(prompt.contains("Hello!"));
}

#[tokio::test]
async fn later_chats_append_to_the_chatbot_row() {
    let app = TestApp::new();

    for message in ["one", "two"] {
        app.json(
            Method::POST,
            "/api/chat",
            json!({ "message": message, "userEmail": "li@example.com" }),
        )
        .await;
    }

    let rows = app.ledger.snapshot();
    assert_eq!(rows.len(), 2);
    let log = &rows[1][MESSAGE_COL];
    assert!(log.find("User: one").unwrap() < log.find("User: two").unwrap());
}

#[tokio::test]
async fn anonymous_chat_is_not_recorded() {
    let app = TestApp::new();

    let resp = app
        .json(Method::POST, "/api/chat", json!({ "message": "hi", "userEmail": "  " }))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(app.ledger.snapshot().is_empty());
}

#[tokio::test]
async fn chat_without_provider_is_unavailable() {
    let app = TestApp::builder().without_ai().build();

    let resp = app.json(Method::POST, "/api/chat", json!({ "message": "hi" })).await;
    assert_error_response(
        &resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "AI service is not configured. Please contact the administrator.",
    );
}

#[tokio::test]
async fn chat_requires_a_message() {
    let app = TestApp::new();

    let resp = app.json(Method::POST, "/api/chat", json!({ "message": "   " })).await;
    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Message is required");
    assert!(app.generator.prompts().is_empty());
}

#[tokio::test]
async fn submission_status_and_notes_can_be_updated() {
    let app = TestApp::new();

    app.json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "hello"))
        .await;
    let timestamp = app.ledger.snapshot()[1][0].clone();

    let resp = app
        .json(
            Method::PATCH,
            "/api/admin/submissions",
            json!({
                "email": "asha@example.com",
                "timestamp": timestamp,
                "status": "Contacted",
                "notes": "Sent price list"
            }),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.data()["message"], "Submission updated");

    let row = &app.ledger.snapshot()[1];
    assert_eq!(row[STATUS_COL], "Contacted");
    assert_eq!(row[NOTES_COL], "Sent price list");
    assert_ne!(row[7], timestamp);
}

#[tokio::test]
async fn unknown_submission_is_not_found() {
    let app = TestApp::new();

    let empty = app
        .json(
            Method::PATCH,
            "/api/admin/submissions",
            json!({ "email": "nobody@example.com", "timestamp": "2025-01-01T00:00:00.000Z" }),
        )
        .await;
    assert_error_response(&empty, StatusCode::NOT_FOUND, "no submissions found");

    app.json(Method::POST, "/api/contact", contact("Asha", "asha@example.com", "hello"))
        .await;
    let mismatch = app
        .json(
            Method::PATCH,
            "/api/admin/submissions",
            json!({ "email": "asha@example.com", "timestamp": "2025-01-01T00:00:00.000Z" }),
        )
        .await;
    assert_error_response(&mismatch, StatusCode::NOT_FOUND, "submission not found");
}

#[tokio::test]
async fn submission_update_needs_email_and_timestamp() {
    let app = TestApp::new();

    let resp = app
        .json(Method::PATCH, "/api/admin/submissions", json!({ "email": "a@b.c" }))
        .await;
    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Email and timestamp are required");
}

#[tokio::test]
async fn submission_update_without_ledger_is_unavailable() {
    let app = TestApp::builder().without_ledger().build();

    let resp = app
        .json(
            Method::PATCH,
            "/api/admin/submissions",
            json!({ "email": "a@b.c", "timestamp": "t" }),
        )
        .await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
}
