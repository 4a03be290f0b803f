use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Store of refresh tokens that are still allowed to mint access tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<(), DomainError>;
    /// Fails with `InvalidToken` when the token is not stored.
    async fn check_availability_token(&self, token: &str) -> Result<(), DomainError>;
    async fn delete_token(&self, token: &str) -> Result<(), DomainError>;
}
