use super::entity::{AddComment, AddedComment, DetailComment};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, DomainError>;
    async fn verify_comment_availability(&self, comment_id: &str) -> Result<(), DomainError>;
    /// Fails with `Forbidden` when `owner` did not write the comment.
    async fn verify_comment_owner(
        &self,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), DomainError>;
    /// Soft delete: the row and its content stay in storage.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError>;
    /// Comments of a thread, oldest first. Replies and like counts are left empty.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<DetailComment>, DomainError>;
}
