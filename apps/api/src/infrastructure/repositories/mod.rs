pub mod sqlx_authentication_repository;
pub mod sqlx_comment_likes_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_reply_repository;
pub mod sqlx_thread_repository;
pub mod sqlx_user_repository;
