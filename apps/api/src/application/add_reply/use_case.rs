use crate::domain::{
    comments::repository::CommentRepository,
    replies::{
        entity::{AddReply, AddReplyPayload, AddedReply},
        repository::ReplyRepository,
    },
    shared::errors::DomainError,
    threads::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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

    #[instrument(skip(self, payload), fields(comment_id = ?payload.comment_id))]
    pub async fn execute(&self, payload: AddReplyPayload) -> Result<AddedReply, DomainError> {
        let reply = AddReply::new(payload)?;
        self.thread_repository
            .verify_thread_availability(&reply.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&reply.comment_id)
            .await?;

        let added = self.reply_repository.add_reply(&reply).await?;
        info!(reply_id = %added.id, "reply added");
        Ok(added)
    }
}
