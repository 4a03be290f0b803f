pub mod bcrypt_password_hash;
pub mod jwt_token_manager;
pub mod rate_limiter;
