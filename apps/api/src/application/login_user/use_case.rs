use crate::application::security::{
    password_hash::PasswordHash,
    token_manager::{AuthenticationTokenManager, TokenPayload},
};
use crate::domain::{
    authentications::{entity::NewAuth, repository::AuthenticationRepository},
    shared::errors::DomainError,
    users::{
        entity::{UserLogin, UserLoginPayload},
        repository::UserRepository,
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hash: Arc<dyn PasswordHash>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    /// Checks credentials and issues a token pair. The refresh token is stored
    /// so it can later be refreshed or revoked.
    #[instrument(skip(self, payload), fields(username = ?payload.username))]
    pub async fn execute(&self, payload: UserLoginPayload) -> Result<NewAuth, DomainError> {
        let login = UserLogin::new(payload)?;

        let hashed = self
            .user_repository
            .get_password_by_username(&login.username)
            .await?;
        self.password_hash
            .compare_password(&login.password, &hashed)
            .await?;

        let id = self
            .user_repository
            .get_id_by_username(&login.username)
            .await?;
        let token_payload = TokenPayload {
            id,
            username: login.username,
        };

        let access_token = self
            .token_manager
            .create_access_token(&token_payload)
            .await?;
        let refresh_token = self
            .token_manager
            .create_refresh_token(&token_payload)
            .await?;
        let auth = NewAuth::new(Some(access_token), Some(refresh_token))?;

        self.authentication_repository
            .add_token(&auth.refresh_token)
            .await?;

        info!(user_id = %token_payload.id, "user logged in");
        Ok(auth)
    }
}
