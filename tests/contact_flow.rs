use httpmock::prelude::*;
use portfolio_site::{
    contact::{ContactClient, ContactForm, ContactPayload, Field, FALLBACK_ERROR},
    toast::{ToastQueue, ToastVariant},
};
use serde_json::json;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(Field::Name, "Jeanne Dupont".to_string());
    form.set(Field::Email, "jeanne@example.com".to_string());
    form.set(Field::Message, "Bonjour, parlons de votre alternance.".to_string());
    form
}

#[tokio::test]
async fn test_success_posts_once_and_clears_form() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Jeanne Dupont",
                    "email": "jeanne@example.com",
                    "message": "Bonjour, parlons de votre alternance.",
                }));
            then.status(200)
                .json_body(json!({ "status": "success", "message": "Message envoyé" }));
        })
        .await;

    let client = ContactClient::new(&server.base_url());
    let mut form = filled_form();
    let payload = form.begin_submit().expect("form should be idle");
    assert!(form.is_submitting());

    let outcome = client.send(&payload).await;
    let toast = form.finish(outcome);

    mock.assert_hits_async(1).await;
    assert!(!form.is_submitting());
    assert_eq!(form.payload(), &ContactPayload::default());

    let mut toasts = ToastQueue::default();
    toasts.push(toast);
    let shown = toasts.iter().next().expect("toast should be visible");
    assert_eq!(shown.variant, ToastVariant::Success);
    assert_eq!(shown.description.as_deref(), Some("Message envoyé"));
}

#[tokio::test]
async fn test_detail_is_shown_and_form_kept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500).json_body(json!({ "detail": "X" }));
        })
        .await;

    let client = ContactClient::new(&server.base_url());
    let mut form = filled_form();
    let before = form.payload().clone();
    let payload = form.begin_submit().expect("form should be idle");
    let toast = form.finish(client.send(&payload).await);

    mock.assert_hits_async(1).await;
    assert!(!form.is_submitting());
    assert_eq!(form.payload(), &before);
    assert_eq!(toast.variant, ToastVariant::Destructive);
    assert_eq!(toast.description.as_deref(), Some("X"));
}

#[tokio::test]
async fn test_missing_detail_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let client = ContactClient::new(&server.base_url());
    let err = client
        .send(&filled_form().payload().clone())
        .await
        .expect_err("503 should be an error");
    assert_eq!(err.user_message(), FALLBACK_ERROR);
}

#[tokio::test]
async fn test_validation_error_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(422).json_body(json!({
                "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }]
            }));
        })
        .await;

    let client = ContactClient::new(&server.base_url());
    let err = client
        .send(&filled_form().payload().clone())
        .await
        .expect_err("422 should be an error");
    assert_eq!(err.user_message(), FALLBACK_ERROR);
}

#[tokio::test]
async fn test_unreachable_backend() {
    // nothing listens on port 1
    let client = ContactClient::new("http://127.0.0.1:1");
    let mut form = filled_form();
    let payload = form.begin_submit().expect("form should be idle");
    let toast = form.finish(client.send(&payload).await);

    assert_eq!(toast.description.as_deref(), Some(FALLBACK_ERROR));
    assert_eq!(form.get(Field::Email), "jeanne@example.com");
}

#[tokio::test]
async fn test_success_without_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200);
        })
        .await;

    let client = ContactClient::new(&format!("{}/", server.base_url()));
    let receipt = client
        .send(&filled_form().payload().clone())
        .await
        .expect("empty 200 should still succeed");
    assert_eq!(receipt.message, None);
}
