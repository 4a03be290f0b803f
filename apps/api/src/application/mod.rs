pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod add_user;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread_detail;
pub mod login_user;
pub mod logout_user;
pub mod refresh_authentication;
pub mod security;
pub mod toggle_comment_like;
