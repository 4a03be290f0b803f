use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::{success, with_fields};
use crate::application::{
    add_reply::use_case::AddReplyUseCase,
    delete_reply::{dto::DeleteReplyRequest, use_case::DeleteReplyUseCase},
};
use crate::domain::replies::entity::AddReplyPayload;
use crate::presentation::http::{errors::AppError, middleware::user::AuthUser, state::AppState};

pub async fn post_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let body = with_fields(
        body,
        &[
            ("threadId", thread_id.as_str()),
            ("commentId", comment_id.as_str()),
            ("owner", user.id.as_str()),
        ],
    );
    let payload = AddReplyPayload::from_json(&body)?;

    let added_reply = AddReplyUseCase::new(
        state.thread_repo.clone(),
        state.comment_repo.clone(),
        state.reply_repo.clone(),
    )
    .execute(payload)
    .await?;

    Ok((
        StatusCode::CREATED,
        success(Some(json!({ "addedReply": added_reply }))),
    ))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    DeleteReplyUseCase::new(
        state.thread_repo.clone(),
        state.comment_repo.clone(),
        state.reply_repo.clone(),
    )
    .execute(DeleteReplyRequest {
        thread_id: Some(thread_id),
        comment_id: Some(comment_id),
        reply_id: Some(reply_id),
        owner: Some(user.id),
    })
    .await?;

    Ok(success(None))
}
