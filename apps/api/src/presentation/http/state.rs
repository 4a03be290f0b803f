use crate::{
    application::security::{password_hash::PasswordHash, token_manager::AuthenticationTokenManager},
    config::Config,
    domain::{
        authentications::repository::AuthenticationRepository,
        comment_likes::repository::CommentLikesRepository, comments::repository::CommentRepository,
        replies::repository::ReplyRepository, threads::repository::ThreadRepository,
        users::repository::UserRepository,
    },
    infrastructure::security::rate_limiter::RateLimiter,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub authentication_repo: Arc<dyn AuthenticationRepository>,
    pub thread_repo: Arc<dyn ThreadRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub reply_repo: Arc<dyn ReplyRepository>,
    pub comment_likes_repo: Arc<dyn CommentLikesRepository>,
    pub password_hash: Arc<dyn PasswordHash>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
    pub rate_limiter: Arc<RateLimiter>,
}
