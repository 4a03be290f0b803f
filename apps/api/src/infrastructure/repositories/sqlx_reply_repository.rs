use crate::domain::{
    replies::{
        entity::{AddReply, AddedReply, DetailReply, DetailReplyPayload},
        repository::ReplyRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(FromRow)]
struct ReplyRow {
    id: String,
    username: Option<String>,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
    comment_id: String,
}

impl TryFrom<ReplyRow> for DetailReply {
    type Error = DomainError;

    fn try_from(row: ReplyRow) -> Result<Self, Self::Error> {
        DetailReply::new(DetailReplyPayload {
            id: Some(row.id),
            username: row.username,
            date: Some(row.date),
            content: Some(row.content),
            is_deleted: Some(row.is_deleted),
            comment_id: Some(row.comment_id),
        })
    }
}

pub struct SqlxReplyRepository {
    pub pool: PgPool,
}

impl SqlxReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for SqlxReplyRepository {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, DomainError> {
        let id = format!("reply-{}", Uuid::now_v7().simple());
        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO replies (id, content, thread_id, comment_id, owner, date, is_deleted)
             VALUES ($1, $2, $3, $4, $5, NOW(), FALSE)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&reply.content)
        .bind(&reply.thread_id)
        .bind(&reply.comment_id)
        .bind(&reply.owner)
        .fetch_one(&self.pool)
        .await?;

        AddedReply::new(Some(id), Some(content), Some(owner))
    }

    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1)")
                .bind(reply_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(DomainError::NotFound("balasan tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), DomainError> {
        let stored_owner =
            sqlx::query_scalar::<_, String>("SELECT owner FROM replies WHERE id = $1")
                .bind(reply_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| DomainError::NotFound("balasan tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(DomainError::Forbidden(
                "anda tidak berhak mengakses resource ini".into(),
            ));
        }
        Ok(())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<DetailReply>, DomainError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ReplyRow>(
            "SELECT r.id, u.username, r.date, r.content, r.is_deleted, r.comment_id
             FROM replies r
             LEFT JOIN users u ON r.owner = u.id
             WHERE r.comment_id = ANY($1)
             ORDER BY r.date ASC, r.id ASC",
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DetailReply::try_from).collect()
    }
}
