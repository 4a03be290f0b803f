use crate::application::security::token_manager::{AuthenticationTokenManager, TokenPayload};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    username: String,
    iat: i64,
    exp: i64,
}

/// HS256 tokens. Access and refresh tokens are signed with different keys.
pub struct JwtTokenManager {
    access_token_key: String,
    refresh_token_key: String,
    access_token_age: i64,
    refresh_token_age: i64,
}

impl JwtTokenManager {
    pub fn new(
        access_token_key: String,
        refresh_token_key: String,
        access_token_age: i64,
        refresh_token_age: i64,
    ) -> Self {
        Self {
            access_token_key,
            refresh_token_key,
            access_token_age,
            refresh_token_age,
        }
    }

    fn sign(&self, payload: &TokenPayload, key: &str, age: i64) -> Result<String, DomainError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            iat: now,
            exp: now + age,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .map_err(|e| DomainError::InfrastructureError(format!("Token generation failed: {}", e)))
    }

    fn verify(token: &str, key: &str) -> Option<TokenPayload> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(key.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .ok()
        .map(|data| TokenPayload {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}

#[async_trait]
impl AuthenticationTokenManager for JwtTokenManager {
    async fn create_access_token(&self, payload: &TokenPayload) -> Result<String, DomainError> {
        self.sign(payload, &self.access_token_key, self.access_token_age)
    }

    async fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, DomainError> {
        self.sign(payload, &self.refresh_token_key, self.refresh_token_age)
    }

    async fn verify_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        Self::verify(token, &self.refresh_token_key)
            .map(|_| ())
            .ok_or_else(|| DomainError::InvalidToken("refresh token tidak valid".into()))
    }

    async fn verify_access_token(&self, token: &str) -> Result<TokenPayload, DomainError> {
        Self::verify(token, &self.access_token_key)
            .ok_or_else(|| DomainError::InvalidToken("access token tidak valid".into()))
    }

    async fn decode_payload(&self, token: &str) -> Result<TokenPayload, DomainError> {
        Self::verify(token, &self.refresh_token_key)
            .ok_or_else(|| DomainError::InvalidToken("refresh token tidak valid".into()))
    }
}
