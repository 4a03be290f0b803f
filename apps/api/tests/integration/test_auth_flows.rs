use crate::helpers::{
    empty_request, expect_status, json_request, read_json, register_and_login, send, spawn_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn registering_a_taken_username_fails() {
    let test_app = spawn_app();
    register_and_login(&test_app.app, "dicoding").await;

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
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "username tidak tersedia");
}

#[tokio::test]
async fn registering_with_a_missing_field_fails() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/users",
            None,
            json!({ "username": "dicoding", "password": "secret" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn registering_a_username_with_restricted_chars_fails() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/users",
            None,
            json!({ "username": "dico ding", "password": "secret", "fullname": "Dicoding" }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let test_app = spawn_app();
    register_and_login(&test_app.app, "dicoding").await;

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/authentications",
            None,
            json!({ "username": "dicoding", "password": "wrong" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::UNAUTHORIZED).await).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn refresh_token_issues_a_working_access_token() {
    let test_app = spawn_app();
    let (_, _, refresh) = register_and_login(&test_app.app, "dicoding").await;

    let res = send(
        &test_app.app,
        json_request(
            "PUT",
            "/authentications",
            None,
            json!({ "refreshToken": refresh }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    let access = body["data"]["accessToken"].as_str().unwrap().to_string();

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/threads",
            Some(&access),
            json!({ "title": "judul", "body": "isi" }),
        ),
    )
    .await;
    expect_status(res, StatusCode::CREATED).await;
}

#[tokio::test]
async fn logged_out_refresh_token_is_rejected() {
    let test_app = spawn_app();
    let (_, _, refresh) = register_and_login(&test_app.app, "dicoding").await;

    let res = send(
        &test_app.app,
        json_request(
            "DELETE",
            "/authentications",
            None,
            json!({ "refreshToken": refresh }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["status"], "success");

    let res = send(
        &test_app.app,
        json_request(
            "PUT",
            "/authentications",
            None,
            json!({ "refreshToken": refresh }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["message"], "refresh token tidak ditemukan di database");
}

#[tokio::test]
async fn access_token_is_not_a_refresh_token() {
    let test_app = spawn_app();
    let (_, access, _) = register_and_login(&test_app.app, "dicoding").await;

    let res = send(
        &test_app.app,
        json_request(
            "PUT",
            "/authentications",
            None,
            json!({ "refreshToken": access }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn refresh_with_non_string_token_is_bad_request() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_request("PUT", "/authentications", None, json!({ "refreshToken": 123 })),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/threads",
            None,
            json!({ "title": "judul", "body": "isi" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::UNAUTHORIZED).await).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_unauthorized() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        empty_request("PUT", "/threads/thread-1/comments/comment-1/likes", Some("garbage")),
    )
    .await;
    expect_status(res, StatusCode::UNAUTHORIZED).await;
}
