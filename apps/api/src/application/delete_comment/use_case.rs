use super::dto::DeleteCommentRequest;
use crate::domain::{
    comments::repository::CommentRepository, shared::errors::DomainError,
    threads::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Soft-deletes a comment on behalf of its owner.
///
/// Existence is checked before ownership, so a missing comment reports
/// `NotFound` even when the caller would not be allowed to delete it.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: DeleteCommentRequest) -> Result<(), DomainError> {
        let request = request.validate()?;

        self.thread_repository
            .verify_thread_availability(&request.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&request.comment_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(&request.comment_id, &request.owner)
            .await?;
        self.comment_repository
            .delete_comment(&request.comment_id)
            .await?;

        info!(comment_id = %request.comment_id, "comment soft-deleted");
        Ok(())
    }
}
