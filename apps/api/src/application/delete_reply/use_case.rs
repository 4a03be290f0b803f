use super::dto::DeleteReplyRequest;
use crate::domain::{
    comments::repository::CommentRepository, replies::repository::ReplyRepository,
    shared::errors::DomainError, threads::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Soft-deletes a reply. Thread, comment and reply existence are verified
/// before the owner check.
pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: DeleteReplyRequest) -> Result<(), DomainError> {
        let request = request.validate()?;

        self.thread_repository
            .verify_thread_availability(&request.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&request.comment_id)
            .await?;
        self.reply_repository
            .verify_reply_availability(&request.reply_id)
            .await?;
        self.reply_repository
            .verify_reply_owner(&request.reply_id, &request.owner)
            .await?;
        self.reply_repository.delete_reply(&request.reply_id).await?;

        info!(reply_id = %request.reply_id, "reply soft-deleted");
        Ok(())
    }
}
