use crate::helpers::{assert_cors_headers, spawn_app, ProviderBehaviour, SentEmail, SENDER_EMAIL};
use mail_relay::dispatch::SendResult;
use mail_relay::domain::Attachment;

#[tokio::test]
async fn a_valid_json_request_is_sent_and_returns_a_200() {
    // arrange
    let app = spawn_app().await;
    let body = serde_json::json!({
        "to": "a@b.com",
        "subject": "Hi",
        "body": "<p>hi</p>",
    });

    // act
    let response = app.post_json(&body).await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    let result: SendResult = response.json().await.unwrap();
    assert_eq!(
        result,
        SendResult::succeeded(serde_json::json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" }))
    );
    assert_eq!(
        app.sent_emails(),
        vec![SentEmail {
            from: SENDER_EMAIL.into(),
            to: "a@b.com".into(),
            subject: "Hi".into(),
            html: "<p>hi</p>".into(),
            attachments: None,
        }]
    );
}

#[tokio::test]
async fn json_requests_with_missing_fields_are_rejected_with_a_400() {
    // arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({ "to": "", "subject": "Hi", "body": "x" }),
            "empty recipient",
        ),
        (
            serde_json::json!({ "to": "a@b.com", "body": "x" }),
            "missing subject",
        ),
        (
            serde_json::json!({ "to": "a@b.com", "subject": "Hi", "body": null }),
            "null body",
        ),
        (serde_json::json!({}), "missing everything"),
    ];

    for (invalid_body, description) in test_cases {
        // act
        let response = app.post_json(&invalid_body).await;

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        assert_cors_headers(&response);
        let result: SendResult = response.json().await.unwrap();
        assert_eq!(
            result,
            SendResult::failed("Missing required fields: to, subject, body")
        );
    }
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn base64_attachments_are_decoded_and_kept_in_order() {
    // arrange
    let app = spawn_app().await;
    let pdf_bytes: Vec<u8> = (0..=255).collect();
    let body = serde_json::json!({
        "to": "a@b.com",
        "subject": "Files",
        "body": "<p>See attached.</p>",
        "attachments": [
            { "filename": "report.pdf", "content": base64::encode(&pdf_bytes) },
            { "filename": "notes.txt", "content": base64::encode("first draft") },
        ]
    });

    // act
    let response = app.post_json(&body).await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let sent = app.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].attachments,
        Some(vec![
            Attachment::new("report.pdf", pdf_bytes),
            Attachment::new("notes.txt", b"first draft".to_vec()),
        ])
    );
}

#[tokio::test]
async fn an_empty_attachment_list_is_omitted_from_the_provider_call() {
    // arrange
    let app = spawn_app().await;
    let body = serde_json::json!({
        "to": "a@b.com",
        "subject": "Hi",
        "body": "x",
        "attachments": [],
    });

    // act
    let response = app.post_json(&body).await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.sent_emails()[0].attachments, None);
}

#[tokio::test]
async fn a_request_without_a_content_type_is_parsed_as_json() {
    // arrange
    let app = spawn_app().await;
    let body = r#"{"to":"a@b.com","subject":"Hi","body":"x"}"#;

    // act
    let response = app
        .api_client
        .post(&app.send_url())
        .body(body)
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.sent_emails().len(), 1);
}

#[tokio::test]
async fn undecodable_bodies_are_a_generic_500() {
    // arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("{not json", "malformed JSON"),
        ("", "an empty body"),
        (
            r#"{"to":"a@b.com","subject":"Hi","body":"x","attachments":[{"filename":"a.bin","content":"***"}]}"#,
            "invalid base64",
        ),
    ];

    for (body, description) in test_cases {
        // act
        let response = app
            .api_client
            .post(&app.send_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.");

        // assert
        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 when the payload was {}.",
            description
        );
        let result: SendResult = response.json().await.unwrap();
        assert_eq!(result, SendResult::failed("An unexpected error occurred"));
    }
    assert!(app.sent_emails().is_empty());
}

#[tokio::test]
async fn provider_refusals_return_a_500_with_the_provider_message() {
    // arrange
    let app = spawn_app().await;
    app.email_client
        .will(ProviderBehaviour::Refuse("Invalid recipient".into()));
    let body = serde_json::json!({ "to": "nobody", "subject": "Hi", "body": "x" });

    // act
    let response = app.post_json(&body).await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
    let result: SendResult = response.json().await.unwrap();
    assert_eq!(result, SendResult::failed("Invalid recipient"));
}

#[tokio::test]
async fn provider_breakage_does_not_leak_details() {
    // arrange
    let app = spawn_app().await;
    app.email_client.will(ProviderBehaviour::Break(
        "connection reset by 10.0.0.7".into(),
    ));
    let body = serde_json::json!({ "to": "a@b.com", "subject": "Hi", "body": "x" });

    // act
    let response = app.post_json(&body).await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.contains("10.0.0.7"));
    let result: SendResult = serde_json::from_str(&text).unwrap();
    assert_eq!(result, SendResult::failed("An unexpected error occurred"));
}

#[tokio::test]
async fn every_submission_is_sent_again() {
    // arrange
    let app = spawn_app().await;
    let body = serde_json::json!({ "to": "a@b.com", "subject": "Hi", "body": "x" });

    // act
    app.post_json(&body).await;
    app.post_json(&body).await;

    // assert
    assert_eq!(app.sent_emails().len(), 2);
}
