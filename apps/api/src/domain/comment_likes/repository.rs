use super::entity::CommentLike;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Like rows are hard-inserted and hard-deleted; storage keeps at most one row
/// per (comment, owner) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentLikesRepository: Send + Sync {
    async fn verify_like_exists(
        &self,
        comment_id: &str,
        owner: &str,
    ) -> Result<bool, DomainError>;
    /// Inserting an already stored pair is a no-op.
    async fn add_like(&self, like: &CommentLike) -> Result<(), DomainError>;
    async fn delete_like(&self, like: &CommentLike) -> Result<(), DomainError>;
    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<i64, DomainError>;
    /// Like counts for many comments in one round-trip. Comments without likes
    /// may be absent from the map.
    async fn get_like_counts_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<HashMap<String, i64>, DomainError>;
}
