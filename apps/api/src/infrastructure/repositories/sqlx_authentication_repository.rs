use crate::domain::{
    authentications::repository::AuthenticationRepository, shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxAuthenticationRepository {
    pub pool: PgPool,
}

impl SqlxAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for SqlxAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), DomainError> {
        let stored = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        if !stored {
            return Err(DomainError::InvalidToken(
                "refresh token tidak ditemukan di database".into(),
            ));
        }
        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
