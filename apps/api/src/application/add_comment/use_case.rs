use crate::domain::{
    comments::{
        entity::{AddComment, AddCommentPayload, AddedComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    threads::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[instrument(skip(self, payload), fields(thread_id = ?payload.thread_id))]
    pub async fn execute(&self, payload: AddCommentPayload) -> Result<AddedComment, DomainError> {
        let comment = AddComment::new(payload)?;
        self.thread_repository
            .verify_thread_availability(&comment.thread_id)
            .await?;

        let added = self.comment_repository.add_comment(&comment).await?;
        info!(comment_id = %added.id, "comment added");
        Ok(added)
    }
}
