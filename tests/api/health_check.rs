use crate::helpers::{assert_cors_headers, spawn_app, SENDER_EMAIL};
use chrono::DateTime;
use mail_relay::routes::HealthReport;

#[tokio::test]
async fn health_check_reports_the_configured_sender() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .get(&app.send_url())
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    let report: HealthReport = response.json().await.unwrap();
    assert_eq!(report.message, "Email API is working");
    assert_eq!(report.from_email, SENDER_EMAIL);
    assert!(
        DateTime::parse_from_rfc3339(&report.timestamp).is_ok(),
        "{} is not an RFC 3339 timestamp",
        report.timestamp
    );
}

#[tokio::test]
async fn health_check_uses_camel_case_keys() {
    // arrange
    let app = spawn_app().await;

    // act
    let body: serde_json::Value = reqwest::get(&app.send_url())
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // assert
    assert_eq!(body["fromEmail"], SENDER_EMAIL);
    assert!(body.get("timestamp").is_some());
    assert!(app.sent_emails().is_empty());
}
