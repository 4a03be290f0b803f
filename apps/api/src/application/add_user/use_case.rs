use crate::application::security::password_hash::PasswordHash;
use crate::domain::{
    shared::errors::DomainError,
    users::{
        entity::{RegisterUser, RegisterUserPayload, RegisteredUser},
        repository::UserRepository,
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    /// Registers a user. The password is hashed before it reaches storage.
    #[instrument(skip(self, payload), fields(username = ?payload.username))]
    pub async fn execute(
        &self,
        payload: RegisterUserPayload,
    ) -> Result<RegisteredUser, DomainError> {
        let mut user = RegisterUser::new(payload)?;

        self.user_repository
            .verify_available_username(&user.username)
            .await?;
        user.password = self.password_hash.hash(&user.password).await?;

        let registered = self.user_repository.add_user(&user).await?;
        info!(user_id = %registered.id, "user registered");
        Ok(registered)
    }
}
