use super::entity::{RegisterUser, RegisteredUser};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `user.password` must already be hashed.
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, DomainError>;
    /// Fails with `Conflict` when the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<(), DomainError>;
    /// Fails with `InvalidCredential` when the username is unknown.
    async fn get_password_by_username(&self, username: &str) -> Result<String, DomainError>;
    async fn get_id_by_username(&self, username: &str) -> Result<String, DomainError>;
}
