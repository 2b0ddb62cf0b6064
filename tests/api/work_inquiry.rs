use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "company": "Acme Pty Ltd",
        "phone": "+61 432 588 330",
        "message": "We need a new site.",
        "budget": "$2K – $5K"
    })
}

#[tokio::test]
async fn a_valid_inquiry_returns_200_and_sends_exactly_two_emails() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_work_inquiry(valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));

    // The admin subject leads with the company name
    let requests = app.email_server.received_requests().await.unwrap();
    assert!(requests.iter().any(|request| {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        body["Subject"] == "New Work Inquiry from Acme Pty Ltd"
    }));
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
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
        .post_work_inquiry(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "We need a new site."
        }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn missing_required_fields_are_rejected_before_any_send() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_work_inquiry(serde_json::json!({ "company": "Acme Pty Ltd" }))
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
}

#[tokio::test]
async fn an_unknown_budget_bracket_is_rejected() {
    // Arrange
    let app = spawn_app().await;

    let mut body = valid_body();
    body["budget"] = serde_json::json!("a few dollars");

    // Act
    let response = app.post_work_inquiry(body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "budget"));
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
    let response = app.post_work_inquiry(valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "An error occurred" }));
}
