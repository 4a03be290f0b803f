use crate::domain::{
    shared::errors::DomainError,
    users::{
        entity::{RegisterUser, RegisteredUser},
        repository::UserRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, DomainError> {
        let id = format!("user-{}", Uuid::now_v7().simple());
        let (id, username, fullname) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4)
             RETURNING id, username, fullname",
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await?;

        RegisteredUser::new(Some(id), Some(username), Some(fullname))
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), DomainError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            return Err(DomainError::Conflict("username tidak tersedia".into()));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DomainError::InvalidCredential("username tidak ditemukan".into()))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DomainError::InvalidCredential("user tidak ditemukan".into()))
    }
}
