use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::success;
use crate::application::{
    login_user::use_case::LoginUserUseCase,
    logout_user::{dto::LogoutUserRequest, use_case::LogoutUserUseCase},
    refresh_authentication::{
        dto::RefreshAuthenticationRequest, use_case::RefreshAuthenticationUseCase,
    },
};
use crate::domain::users::entity::UserLoginPayload;
use crate::presentation::http::{errors::AppError, state::AppState};

pub async fn post_authentication(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = body?;
    let payload = UserLoginPayload::from_json(&body)?;

    let auth = LoginUserUseCase::new(
        state.user_repo.clone(),
        state.authentication_repo.clone(),
        state.token_manager.clone(),
        state.password_hash.clone(),
    )
    .execute(payload)
    .await?;

    Ok((StatusCode::CREATED, success(Some(json!(auth)))))
}

pub async fn put_authentication(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    let request = RefreshAuthenticationRequest::from_json(&body)?;

    let access_token = RefreshAuthenticationUseCase::new(
        state.authentication_repo.clone(),
        state.token_manager.clone(),
    )
    .execute(request)
    .await?;

    Ok(success(Some(json!({ "accessToken": access_token }))))
}

pub async fn delete_authentication(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    let request = LogoutUserRequest::from_json(&body)?;

    LogoutUserUseCase::new(state.authentication_repo.clone())
        .execute(request)
        .await?;

    Ok(success(None))
}
