use super::dto::RefreshAuthenticationRequest;
use crate::application::security::token_manager::AuthenticationTokenManager;
use crate::domain::{
    authentications::repository::AuthenticationRepository, shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Trades a stored, correctly signed refresh token for a new access token.
pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        request: RefreshAuthenticationRequest,
    ) -> Result<String, DomainError> {
        let refresh_token = request.refresh_token()?;

        self.token_manager
            .verify_refresh_token(&refresh_token)
            .await?;
        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;

        let payload = self.token_manager.decode_payload(&refresh_token).await?;
        debug!(user_id = %payload.id, "access token refreshed");
        self.token_manager.create_access_token(&payload).await
    }
}
