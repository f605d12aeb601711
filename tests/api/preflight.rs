use crate::helpers::{assert_cors_headers, spawn_app};

#[tokio::test]
async fn preflight_requests_get_an_empty_200_with_cors_headers() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .request(reqwest::Method::OPTIONS, &app.send_url())
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
async fn unknown_routes_still_carry_cors_headers_and_the_envelope() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = reqwest::get(&format!("{}/nowhere", app.address))
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.status().as_u16(), 404);
    assert_cors_headers(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}
