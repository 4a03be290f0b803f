use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::{success, with_fields};
use crate::application::{
    add_comment::use_case::AddCommentUseCase,
    delete_comment::{dto::DeleteCommentRequest, use_case::DeleteCommentUseCase},
};
use crate::domain::comments::entity::AddCommentPayload;
use crate::presentation::http::{errors::AppError, middleware::user::AuthUser, state::AppState};

pub async fn post_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    user: AuthUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let body = with_fields(
        body,
        &[("threadId", thread_id.as_str()), ("owner", user.id.as_str())],
    );
    let payload = AddCommentPayload::from_json(&body)?;

    let use_case = AddCommentUseCase::new(state.thread_repo.clone(), state.comment_repo.clone());
    let added_comment = use_case.execute(payload).await?;

    Ok((
        StatusCode::CREATED,
        success(Some(json!({ "addedComment": added_comment }))),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    DeleteCommentUseCase::new(state.thread_repo.clone(), state.comment_repo.clone())
        .execute(DeleteCommentRequest {
            thread_id: Some(thread_id),
            comment_id: Some(comment_id),
            owner: Some(user.id),
        })
        .await?;

    Ok(success(None))
}
