use super::dto::LogoutUserRequest;
use crate::domain::{
    authentications::repository::AuthenticationRepository, shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    /// Revokes a refresh token. Unknown tokens fail with `InvalidToken`.
    #[instrument(skip_all)]
    pub async fn execute(&self, request: LogoutUserRequest) -> Result<(), DomainError> {
        let refresh_token = request.refresh_token()?;

        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;
        self.authentication_repository
            .delete_token(&refresh_token)
            .await?;

        info!("refresh token revoked");
        Ok(())
    }
}
