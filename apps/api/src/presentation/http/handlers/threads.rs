use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::{success, with_fields};
use crate::application::{
    add_thread::use_case::AddThreadUseCase, get_thread_detail::use_case::GetThreadDetailUseCase,
};
use crate::domain::threads::entity::AddThreadPayload;
use crate::presentation::http::{errors::AppError, middleware::user::AuthUser, state::AppState};

pub async fn post_thread(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let payload = AddThreadPayload::from_json(&with_fields(body, &[("owner", user.id.as_str())]))?;

    let added_thread = AddThreadUseCase::new(state.thread_repo.clone())
        .execute(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        success(Some(json!({ "addedThread": added_thread }))),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let thread = GetThreadDetailUseCase::new(
        state.thread_repo.clone(),
        state.comment_repo.clone(),
        state.reply_repo.clone(),
        state.comment_likes_repo.clone(),
    )
    .execute(thread_id.as_str())
    .await?;

    Ok(success(Some(json!({ "thread": thread }))))
}
