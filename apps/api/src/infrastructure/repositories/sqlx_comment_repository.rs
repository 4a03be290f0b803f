use crate::domain::{
    comments::{
        entity::{AddComment, AddedComment, DetailComment, DetailCommentPayload},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(FromRow)]
struct CommentRow {
    id: String,
    username: Option<String>,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl TryFrom<CommentRow> for DetailComment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        DetailComment::new(DetailCommentPayload {
            id: Some(row.id),
            username: row.username,
            date: Some(row.date),
            content: Some(row.content),
            is_deleted: Some(row.is_deleted),
            ..Default::default()
        })
    }
}

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, DomainError> {
        let id = format!("comment-{}", Uuid::now_v7().simple());
        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO comments (id, thread_id, content, owner, date, is_deleted)
             VALUES ($1, $2, $3, $4, NOW(), FALSE)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&comment.thread_id)
        .bind(&comment.content)
        .bind(&comment.owner)
        .fetch_one(&self.pool)
        .await?;

        AddedComment::new(Some(id), Some(content), Some(owner))
    }

    async fn verify_comment_availability(&self, comment_id: &str) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
                .bind(comment_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(DomainError::NotFound("komentar tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        let stored_owner =
            sqlx::query_scalar::<_, String>("SELECT owner FROM comments WHERE id = $1")
                .bind(comment_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| DomainError::NotFound("komentar tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(DomainError::Forbidden(
                "anda tidak berhak mengakses resource ini".into(),
            ));
        }
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<DetailComment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, u.username, c.date, c.content, c.is_deleted
             FROM comments c
             LEFT JOIN users u ON c.owner = u.id
             WHERE c.thread_id = $1
             ORDER BY c.date ASC, c.id ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DetailComment::try_from).collect()
    }
}
