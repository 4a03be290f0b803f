use super::dto::ToggleCommentLikeRequest;
use crate::domain::{
    comment_likes::{entity::CommentLike, repository::CommentLikesRepository},
    comments::repository::CommentRepository,
    shared::errors::DomainError,
    threads::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Outcome of a toggle, for logging and callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

/// Flips whether `owner` likes a comment.
///
/// The parent thread and the comment must exist. The check-then-mutate pair is
/// not atomic across requests; the `(comment_id, owner)` uniqueness constraint
/// in storage keeps concurrent inserts from producing duplicate rows.
pub struct ToggleCommentLikeUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    comment_likes_repository: Arc<dyn CommentLikesRepository>,
}

impl ToggleCommentLikeUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        comment_likes_repository: Arc<dyn CommentLikesRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            comment_likes_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: ToggleCommentLikeRequest,
    ) -> Result<LikeState, DomainError> {
        let request = request.validate()?;

        self.thread_repository
            .verify_thread_availability(&request.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&request.comment_id)
            .await?;

        let like = CommentLike::new(Some(request.comment_id), Some(request.owner))?;
        let liked = self
            .comment_likes_repository
            .verify_like_exists(&like.comment_id, &like.owner)
            .await?;

        let state = if liked {
            self.comment_likes_repository.delete_like(&like).await?;
            LikeState::Unliked
        } else {
            self.comment_likes_repository.add_like(&like).await?;
            LikeState::Liked
        };

        debug!(comment_id = %like.comment_id, ?state, "comment like toggled");
        Ok(state)
    }
}
