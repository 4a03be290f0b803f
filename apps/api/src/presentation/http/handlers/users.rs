use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::success;
use crate::application::add_user::use_case::AddUserUseCase;
use crate::domain::users::entity::RegisterUserPayload;
use crate::presentation::http::{errors::AppError, state::AppState};

pub async fn post_user(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let payload = RegisterUserPayload::from_json(&body)?;

    let added_user = AddUserUseCase::new(state.user_repo.clone(), state.password_hash.clone())
        .execute(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        success(Some(json!({ "addedUser": added_user }))),
    ))
}
