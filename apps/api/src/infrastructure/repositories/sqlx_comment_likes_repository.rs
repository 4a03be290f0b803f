use crate::domain::{
    comment_likes::{entity::CommentLike, repository::CommentLikesRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::debug;

pub struct SqlxCommentLikesRepository {
    pub pool: PgPool,
}

impl SqlxCommentLikesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikesRepository for SqlxCommentLikesRepository {
    async fn verify_like_exists(
        &self,
        comment_id: &str,
        owner: &str,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND owner = $2)",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::from)
    }

    async fn add_like(&self, like: &CommentLike) -> Result<(), DomainError> {
        // A concurrent toggle may have inserted the same pair already.
        let result = sqlx::query(
            "INSERT INTO comment_likes (comment_id, owner) VALUES ($1, $2)
             ON CONFLICT (comment_id, owner) DO NOTHING",
        )
        .bind(&like.comment_id)
        .bind(&like.owner)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(comment_id = %like.comment_id, "like already stored");
        }
        Ok(())
    }

    async fn delete_like(&self, like: &CommentLike) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(&like.comment_id)
            .bind(&like.owner)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::from)
    }

    async fn get_like_counts_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<HashMap<String, i64>, DomainError> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT comment_id, COUNT(*) FROM comment_likes
             WHERE comment_id = ANY($1)
             GROUP BY comment_id",
        )
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
