use crate::helpers::{
    create_comment, create_reply, create_thread, empty_request, expect_status, get_thread,
    json_request, read_json, register_and_login, send, spawn_app, spawn_app_with_rate_limit,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn thread_detail_aggregates_comments_replies_and_likes() {
    let test_app = spawn_app();
    let app = &test_app.app;
    let (_, alice, _) = register_and_login(app, "alice").await;
    let (_, bob, _) = register_and_login(app, "bob").await;

    let thread_id = create_thread(app, &alice).await;
    let first = create_comment(app, &alice, &thread_id, "komentar pertama").await;
    let second = create_comment(app, &bob, &thread_id, "komentar kedua").await;
    create_reply(app, &bob, &thread_id, &first, "balasan pertama").await;
    create_reply(app, &alice, &thread_id, &first, "balasan kedua").await;

    for token in [&alice, &bob] {
        let res = send(
            app,
            empty_request(
                "PUT",
                &format!("/threads/{}/comments/{}/likes", thread_id, first),
                Some(token),
            ),
        )
        .await;
        expect_status(res, StatusCode::OK).await;
    }

    let thread = get_thread(app, &thread_id).await;
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "alice");

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "alice");
    assert_eq!(comments[0]["content"], "komentar pertama");
    assert_eq!(comments[0]["likeCount"], 2);
    let replies = comments[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["content"], "balasan pertama");
    assert_eq!(replies[0]["username"], "bob");
    assert_eq!(replies[1]["content"], "balasan kedua");

    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["likeCount"], 0);
    assert_eq!(comments[1]["replies"], json!([]));

    assert!(comments[0].get("isDeleted").is_none());
}

#[tokio::test]
async fn thread_without_comments_has_empty_list() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;
    let thread_id = create_thread(&test_app.app, &token).await;

    let thread = get_thread(&test_app.app, &thread_id).await;
    assert_eq!(thread["comments"], json!([]));
}

#[tokio::test]
async fn unknown_thread_is_not_found() {
    let test_app = spawn_app();

    let res = send(&test_app.app, empty_request("GET", "/threads/thread-404", None)).await;
    let body: Value = read_json(expect_status(res, StatusCode::NOT_FOUND).await).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn thread_with_missing_body_is_bad_request() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;

    let res = send(
        &test_app.app,
        json_request("POST", "/threads", Some(&token), json!({ "title": "judul" })),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn comment_on_unknown_thread_is_not_found() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            "/threads/thread-404/comments",
            Some(&token),
            json!({ "content": "halo" }),
        ),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn reply_on_unknown_comment_is_not_found() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;
    let thread_id = create_thread(&test_app.app, &token).await;

    let res = send(
        &test_app.app,
        json_request(
            "POST",
            &format!("/threads/{}/comments/comment-404/replies", thread_id),
            Some(&token),
            json!({ "content": "halo" }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::NOT_FOUND).await).await;
    assert_eq!(body["message"], "komentar tidak ditemukan");
}

#[tokio::test]
async fn deleting_someone_elses_comment_is_forbidden() {
    let test_app = spawn_app();
    let app = &test_app.app;
    let (_, alice, _) = register_and_login(app, "alice").await;
    let (_, bob, _) = register_and_login(app, "bob").await;
    let thread_id = create_thread(app, &alice).await;
    let comment_id = create_comment(app, &alice, &thread_id, "punya alice").await;

    let res = send(
        app,
        empty_request(
            "DELETE",
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&bob),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::FORBIDDEN).await).await;
    assert_eq!(body["message"], "anda tidak berhak mengakses resource ini");

    let thread = get_thread(app, &thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "punya alice");
}

#[tokio::test]
async fn deleted_comment_is_redacted_but_kept() {
    let test_app = spawn_app();
    let app = &test_app.app;
    let (_, alice, _) = register_and_login(app, "alice").await;
    let (_, bob, _) = register_and_login(app, "bob").await;
    let thread_id = create_thread(app, &alice).await;
    let comment_id = create_comment(app, &alice, &thread_id, "rahasia").await;
    create_reply(app, &bob, &thread_id, &comment_id, "masih terlihat").await;

    let res = send(
        app,
        empty_request(
            "DELETE",
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&alice),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["status"], "success");

    let thread = get_thread(app, &thread_id).await;
    let comment = &thread["comments"][0];
    assert_eq!(comment["id"], comment_id.as_str());
    assert_eq!(comment["content"], "**komentar telah dihapus**");
    assert_eq!(comment["replies"][0]["content"], "masih terlihat");

    // Soft delete leaves the stored text alone.
    assert_eq!(
        test_app.store.stored_comment_content(&comment_id).as_deref(),
        Some("rahasia")
    );
}

#[tokio::test]
async fn deleting_an_unknown_comment_is_not_found() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;
    let thread_id = create_thread(&test_app.app, &token).await;

    let res = send(
        &test_app.app,
        empty_request(
            "DELETE",
            &format!("/threads/{}/comments/comment-404", thread_id),
            Some(&token),
        ),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn reply_delete_checks_owner_then_redacts() {
    let test_app = spawn_app();
    let app = &test_app.app;
    let (_, alice, _) = register_and_login(app, "alice").await;
    let (_, bob, _) = register_and_login(app, "bob").await;
    let thread_id = create_thread(app, &alice).await;
    let comment_id = create_comment(app, &alice, &thread_id, "komentar").await;
    let reply_id = create_reply(app, &bob, &thread_id, &comment_id, "balasan bob").await;
    let uri = format!(
        "/threads/{}/comments/{}/replies/{}",
        thread_id, comment_id, reply_id
    );

    let res = send(app, empty_request("DELETE", &uri, Some(&alice))).await;
    expect_status(res, StatusCode::FORBIDDEN).await;

    let res = send(app, empty_request("DELETE", &uri, Some(&bob))).await;
    expect_status(res, StatusCode::OK).await;

    let thread = get_thread(app, &thread_id).await;
    let reply = &thread["comments"][0]["replies"][0];
    assert_eq!(reply["id"], reply_id.as_str());
    assert_eq!(reply["content"], "**balasan telah dihapus**");
}

#[tokio::test]
async fn liking_twice_restores_the_original_state() {
    let test_app = spawn_app();
    let app = &test_app.app;
    let (_, token, _) = register_and_login(app, "alice").await;
    let thread_id = create_thread(app, &token).await;
    let comment_id = create_comment(app, &token, &thread_id, "komentar").await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let res = send(app, empty_request("PUT", &uri, Some(&token))).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body, json!({ "status": "success" }));
    assert_eq!(test_app.store.like_rows(), 1);
    assert_eq!(get_thread(app, &thread_id).await["comments"][0]["likeCount"], 1);

    let res = send(app, empty_request("PUT", &uri, Some(&token))).await;
    expect_status(res, StatusCode::OK).await;
    assert_eq!(test_app.store.like_rows(), 0);
    assert_eq!(get_thread(app, &thread_id).await["comments"][0]["likeCount"], 0);
}

#[tokio::test]
async fn liking_a_comment_of_an_unknown_thread_is_not_found() {
    let test_app = spawn_app();
    let (_, token, _) = register_and_login(&test_app.app, "alice").await;

    let res = send(
        &test_app.app,
        empty_request("PUT", "/threads/thread-404/comments/comment-1/likes", Some(&token)),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
    assert_eq!(test_app.store.like_rows(), 0);
}

#[tokio::test]
async fn thread_routes_are_rate_limited_per_path() {
    let test_app = spawn_app_with_rate_limit(2);
    let uri = "/threads/thread-404";

    for remaining in ["1", "0"] {
        let res = send(&test_app.app, empty_request("GET", uri, None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["x-ratelimit-limit"], "2");
        assert_eq!(res.headers()["x-ratelimit-remaining"], remaining);
    }

    let res = send(&test_app.app, empty_request("GET", uri, None)).await;
    assert_eq!(res.headers()["x-ratelimit-remaining"], "0");
    let reset = res.headers()["x-ratelimit-reset"].to_str().unwrap().to_string();
    assert!(chrono::DateTime::parse_from_rfc3339(&reset).is_ok());
    let body: Value = read_json(expect_status(res, StatusCode::TOO_MANY_REQUESTS).await).await;
    assert_eq!(body["status"], "fail");

    // Other paths keep their own window.
    let res = send(&test_app.app, empty_request("GET", "/threads/thread-405", None)).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn non_thread_routes_are_not_rate_limited() {
    let test_app = spawn_app_with_rate_limit(1);

    for _ in 0..3 {
        let res = send(
            &test_app.app,
            json_request("PUT", "/authentications", None, json!({})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(!res.headers().contains_key("x-ratelimit-limit"));
    }
}
