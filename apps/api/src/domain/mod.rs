pub mod authentications;
pub mod comment_likes;
pub mod comments;
pub mod replies;
pub mod shared;
pub mod threads;
pub mod users;
