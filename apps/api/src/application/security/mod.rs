pub mod password_hash;
pub mod token_manager;
