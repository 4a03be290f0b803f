use crate::domain::{
    comment_likes::repository::CommentLikesRepository,
    comments::repository::CommentRepository,
    replies::{entity::DetailReply, repository::ReplyRepository},
    shared::errors::DomainError,
    threads::{entity::ThreadDetail, repository::ThreadRepository},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Assembles a thread with its comments, their replies and like counts.
///
/// # Round-trips
/// 1. Thread header (a missing thread aborts with `NotFound`)
/// 2. Comments of the thread, oldest first
/// 3. Replies of all comments, in a single batched call
/// 4. Like counts of all comments, in a single batched call
///
/// Steps 3 and 4 are skipped entirely when the thread has no comments.
/// Any failure aborts the whole aggregation; partial threads are never returned.
pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    comment_likes_repository: Arc<dyn CommentLikesRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        comment_likes_repository: Arc<dyn CommentLikesRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            comment_likes_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, DomainError> {
        let thread = self.thread_repository.get_detail_thread(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        if comments.is_empty() {
            debug!("thread has no comments, skipping replies and likes");
            return Ok(thread.with_comments(comments));
        }

        let comment_ids: Vec<String> = comments.iter().map(|c| c.id().to_string()).collect();

        let replies = self
            .reply_repository
            .get_replies_by_comment_ids(&comment_ids)
            .await?;
        let reply_count = replies.len();
        let mut replies_by_comment = group_replies_by_comment(replies);

        let like_counts = self
            .comment_likes_repository
            .get_like_counts_by_comment_ids(&comment_ids)
            .await?;

        let comments = comments
            .into_iter()
            .map(|comment| {
                let replies = replies_by_comment.remove(comment.id()).unwrap_or_default();
                let like_count = like_counts.get(comment.id()).copied().unwrap_or(0);
                comment.with_replies(replies).with_like_count(like_count)
            })
            .collect::<Vec<_>>();

        debug!(
            comments = comments.len(),
            replies = reply_count,
            "thread detail assembled"
        );
        Ok(thread.with_comments(comments))
    }
}

/// Groups replies under their parent comment id, keeping fetch order within
/// each group.
fn group_replies_by_comment(replies: Vec<DetailReply>) -> HashMap<String, Vec<DetailReply>> {
    let mut grouped: HashMap<String, Vec<DetailReply>> = HashMap::new();
    for reply in replies {
        if let Some(parent) = reply.comment_id().map(str::to_owned) {
            grouped.entry(parent).or_default().push(reply);
        }
    }
    grouped
}
