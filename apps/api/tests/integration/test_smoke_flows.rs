use crate::helpers::{empty_request, expect_status, json_request, read_json, send, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn hello_route_answers() {
    let test_app = spawn_app();

    let res = send(&test_app.app, empty_request("GET", "/hello", None)).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body, json!({ "status": "success", "message": "Hello World!" }));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let test_app = spawn_app();

    let res = send(&test_app.app, empty_request("GET", "/hello", None)).await;
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn registration_echoes_the_stored_user() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/users",
            None,
            json!({ "username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    let added = &body["data"]["addedUser"];
    assert_eq!(added["username"], "dicoding");
    assert_eq!(added["fullname"], "Dicoding Indonesia");
    assert!(added["id"].as_str().unwrap().starts_with("user-"));
    assert!(added.get("password").is_none());
}
