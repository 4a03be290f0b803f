use super::entity::{AddReply, AddedReply, DetailReply};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, DomainError>;
    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), DomainError>;
    /// Fails with `Forbidden` when `owner` did not write the reply.
    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), DomainError>;
    /// Soft delete: the row and its content stay in storage.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError>;
    /// All replies of the given comments in one round-trip, oldest first.
    /// Every returned reply carries its parent comment id.
    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[String],
    ) -> Result<Vec<DetailReply>, DomainError>;
}
