use forum_api::domain::{
    comment_likes::entity::CommentLike,
    comments::entity::{AddComment, AddCommentPayload, DELETED_COMMENT_CONTENT, DetailComment},
    replies::entity::{DELETED_REPLY_CONTENT, DetailReply},
    shared::errors::DomainError,
    threads::entity::{AddThread, AddThreadPayload, ThreadDetail},
    users::entity::{RegisterUser, RegisterUserPayload},
};
use serde_json::json;

fn comment_json(is_deleted: bool) -> serde_json::Value {
    json!({
        "id": "comment-123",
        "username": "dicoding",
        "date": "2021-08-08T07:22:33.555Z",
        "content": "sebuah comment",
        "isDeleted": is_deleted,
    })
}

#[test]
fn deleted_comment_content_is_replaced() {
    let comment = DetailComment::from_json(&comment_json(true)).unwrap();
    assert_eq!(comment.content(), DELETED_COMMENT_CONTENT);

    let comment = DetailComment::from_json(&comment_json(false)).unwrap();
    assert_eq!(comment.content(), "sebuah comment");
}

#[test]
fn deleted_reply_content_is_replaced() {
    let reply = DetailReply::from_json(&json!({
        "id": "reply-123",
        "content": "sebuah balasan",
        "date": "2021-08-08T07:59:48.766Z",
        "username": "johndoe",
        "isDeleted": true,
    }))
    .unwrap();
    assert_eq!(reply.content(), DELETED_REPLY_CONTENT);
    assert!(reply.is_deleted());
}

#[test]
fn detail_comment_serializes_without_deleted_flag() {
    let comment = DetailComment::from_json(&comment_json(true))
        .unwrap()
        .with_like_count(3);
    let value = serde_json::to_value(&comment).unwrap();

    assert_eq!(value["likeCount"], 3);
    assert_eq!(value["replies"], json!([]));
    assert!(value.get("isDeleted").is_none());
}

#[test]
fn negative_like_count_is_rejected() {
    let mut payload = comment_json(false);
    payload["likeCount"] = json!(-1);
    assert_eq!(
        DetailComment::from_json(&payload).unwrap_err(),
        DomainError::invalid_type(DetailComment::ENTITY, "likeCount")
    );
}

#[test]
fn thread_detail_accepts_nested_comments() {
    let thread = ThreadDetail::from_json(&json!({
        "id": "thread-123",
        "title": "sebuah thread",
        "body": "sebuah body thread",
        "date": "2021-08-08T07:19:09.775Z",
        "username": "dicoding",
        "comments": [comment_json(false)],
    }))
    .unwrap();

    assert_eq!(thread.comments().len(), 1);
    assert_eq!(thread.comments()[0].id(), "comment-123");
}

#[test]
fn thread_detail_rejects_bad_date() {
    let err = ThreadDetail::from_json(&json!({
        "id": "thread-123",
        "title": "sebuah thread",
        "body": "sebuah body thread",
        "date": "yesterday",
        "username": "dicoding",
    }))
    .unwrap_err();
    assert_eq!(err, DomainError::invalid_type(ThreadDetail::ENTITY, "date"));
}

#[test]
fn username_longer_than_fifty_chars_is_rejected() {
    let err = RegisterUser::new(RegisterUserPayload {
        username: Some("a".repeat(51)),
        password: Some("secret".into()),
        fullname: Some("Dicoding Indonesia".into()),
    })
    .unwrap_err();
    assert_eq!(err, DomainError::UsernameTooLong);
}

#[test]
fn username_with_restricted_chars_is_rejected() {
    let err = RegisterUser::new(RegisterUserPayload {
        username: Some("dico ding".into()),
        password: Some("secret".into()),
        fullname: Some("Dicoding Indonesia".into()),
    })
    .unwrap_err();
    assert_eq!(err, DomainError::UsernameRestrictedChars);
}

#[test]
fn missing_field_wins_over_wrong_type() {
    let err = RegisterUserPayload::from_json(&json!({
        "username": 123,
        "password": "secret",
    }))
    .unwrap_err();
    assert_eq!(err, DomainError::missing(RegisterUser::ENTITY, "fullname"));

    let err = RegisterUserPayload::from_json(&json!({
        "username": 123,
        "password": "secret",
        "fullname": "Dicoding",
    }))
    .unwrap_err();
    assert_eq!(err, DomainError::invalid_type(RegisterUser::ENTITY, "username"));
}

#[test]
fn add_thread_requires_owner() {
    let err = AddThread::new(AddThreadPayload {
        title: Some("judul".into()),
        body: Some("isi".into()),
        owner: None,
    })
    .unwrap_err();
    assert_eq!(err, DomainError::missing(AddThread::ENTITY, "owner"));
}

#[test]
fn add_comment_keeps_all_fields() {
    let comment = AddComment::new(AddCommentPayload {
        thread_id: Some("thread-123".into()),
        content: Some("halo".into()),
        owner: Some("user-123".into()),
    })
    .unwrap();
    assert_eq!(comment.thread_id, "thread-123");
    assert_eq!(comment.content, "halo");
    assert_eq!(comment.owner, "user-123");
}

#[test]
fn comment_like_needs_both_ids() {
    assert!(CommentLike::new(Some("comment-123".into()), Some("user-123".into())).is_ok());
    assert_eq!(
        CommentLike::new(Some("comment-123".into()), None).unwrap_err(),
        DomainError::missing(CommentLike::ENTITY, "owner")
    );
}

#[test]
fn validation_errors_are_classified() {
    assert!(DomainError::missing("X", "y").is_validation());
    assert!(DomainError::UsernameTooLong.is_validation());
    assert!(!DomainError::NotFound("x".into()).is_validation());
}
