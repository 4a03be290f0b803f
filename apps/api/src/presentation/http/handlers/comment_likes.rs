use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use super::success;
use crate::application::toggle_comment_like::{
    dto::ToggleCommentLikeRequest, use_case::ToggleCommentLikeUseCase,
};
use crate::presentation::http::{errors::AppError, middleware::user::AuthUser, state::AppState};

pub async fn put_comment_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    ToggleCommentLikeUseCase::new(
        state.thread_repo.clone(),
        state.comment_repo.clone(),
        state.comment_likes_repo.clone(),
    )
    .execute(ToggleCommentLikeRequest {
        thread_id: Some(thread_id),
        comment_id: Some(comment_id),
        owner: Some(user.id),
    })
    .await?;

    Ok(success(None))
}
