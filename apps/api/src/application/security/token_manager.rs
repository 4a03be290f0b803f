use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identity embedded in access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationTokenManager: Send + Sync {
    async fn create_access_token(&self, payload: &TokenPayload) -> Result<String, DomainError>;
    async fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, DomainError>;
    /// Fails with `InvalidToken` when the signature or expiry is wrong.
    async fn verify_refresh_token(&self, token: &str) -> Result<(), DomainError>;
    /// Verifies an access token and returns its identity.
    async fn verify_access_token(&self, token: &str) -> Result<TokenPayload, DomainError>;
    /// Reads the identity carried by a refresh token.
    async fn decode_payload(&self, token: &str) -> Result<TokenPayload, DomainError>;
}
