use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with, valid_submission, RECIPIENT};

#[tokio::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer re_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Email sent successfully"}));
}

#[tokio::test]
async fn contact_relays_the_submission_to_the_provider() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_contact(&valid_submission()).await;

    let sent = app.sent_emails().await;
    let email = &sent[0];
    assert_eq!(email["from"], json!(app.config.email_client.sender));
    assert_eq!(email["to"], json!(RECIPIENT));
    assert_eq!(email["subject"], json!("Portfolio Contact: Hi"));
    assert_eq!(email["reply_to"], json!("ada@example.com"));

    let text = email["text"].as_str().unwrap();
    assert!(text.contains("From: Ada"));
    assert!(text.contains("Email: ada@example.com"));
    assert!(text.contains("Subject: Hi"));
    assert!(text.ends_with("Message:\nHello\n"));
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_missing_or_empty() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({"name": "", "email": "ada@example.com", "subject": "Hi", "message": "Hello"}), "empty name"),
        (json!({"name": "Ada", "email": "", "subject": "Hi", "message": "Hello"}), "empty email"),
        (json!({"name": "Ada", "email": "ada@example.com", "subject": "", "message": "Hello"}), "empty subject"),
        (json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi"}), "missing message"),
        (json!({"name": null, "email": "ada@example.com", "subject": "Hi", "message": "Hello"}), "null name"),
        (json!({}), "no fields at all"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description,
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "All fields are required"}));
    }
}

#[tokio::test]
async fn contact_returns_a_400_for_an_invalid_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in ["not-an-email", "ada@example", "ada@@example.com", "ada lovelace@example.com"] {
        let mut body = valid_submission();
        body["email"] = json!(email);

        let response = app.post_contact(&body).await;

        assert_eq!(400, response.status().as_u16(), "{} was accepted", email);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid email address"}));
    }
}

#[tokio::test]
async fn contact_returns_a_500_when_no_token_is_configured() {
    let app = spawn_app_with(|c| c.email_client.authorization_token = None).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Email service not configured"}));
}

#[tokio::test]
async fn contact_returns_a_500_without_retrying_when_the_provider_fails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "invalid `to` field"})),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to send email"}));
}

#[tokio::test]
async fn contact_returns_a_generic_500_when_the_provider_is_unreachable() {
    let app = spawn_app_with(|c| c.email_client.base_url = "http://127.0.0.1:1".into()).await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn contact_returns_a_500_for_a_body_that_is_not_json() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .api_client
        .post(&format!("{}/api/contact", &app.addr))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=ada%40example.com&subject=Hi&message=Hello")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn a_double_submit_sends_two_emails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let first = app.post_contact(&valid_submission()).await;
    let second = app.post_contact(&valid_submission()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn contact_only_accepts_post() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/api/contact", &app.addr))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
}
