use crate::domain::{
    shared::errors::DomainError,
    threads::{
        entity::{AddThread, AddedThread, ThreadDetail, ThreadDetailPayload},
        repository::ThreadRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: Option<String>,
}

impl ThreadRow {
    fn into_detail(self) -> Result<ThreadDetail, DomainError> {
        ThreadDetail::new(ThreadDetailPayload {
            id: Some(self.id),
            title: Some(self.title),
            body: Some(self.body),
            date: Some(self.date),
            username: self.username,
            comments: None,
        })
    }
}

pub struct SqlxThreadRepository {
    pub pool: PgPool,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, DomainError> {
        let id = format!("thread-{}", Uuid::now_v7().simple());
        let (id, title, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, NOW())
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await?;

        AddedThread::new(Some(id), Some(title), Some(owner))
    }

    async fn verify_thread_availability(&self, thread_id: &str) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
                .bind(thread_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(DomainError::NotFound("thread tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn get_detail_thread(&self, thread_id: &str) -> Result<ThreadDetail, DomainError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            "SELECT t.id, t.title, t.body, t.date, u.username
             FROM threads t
             LEFT JOIN users u ON t.owner = u.id
             WHERE t.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::NotFound("thread tidak ditemukan".into()))?;

        row.into_detail()
    }
}
