use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHash: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, DomainError>;
    /// Fails with `InvalidCredential` when `password` does not match `hashed`.
    async fn compare_password(&self, password: &str, hashed: &str) -> Result<(), DomainError>;
}
