use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_signup_returns_200_and_sends_exactly_two_emails() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_newsletter(serde_json::json!({ "email": "jane@example.com" }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "Subscribed successfully" })
    );
}

#[tokio::test]
async fn an_invalid_email_is_rejected_before_any_send() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_newsletter(serde_json::json!({ "email": "not-an-email" }))
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "email"));
}

#[tokio::test]
async fn a_missing_email_is_rejected_before_any_send() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_newsletter(serde_json::json!({})).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn a_send_failure_is_reported_with_a_generic_body() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_newsletter(serde_json::json!({ "email": "jane@example.com" }))
        .await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "An error occurred" }));
}
