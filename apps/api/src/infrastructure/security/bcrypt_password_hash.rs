use crate::application::security::password_hash::PasswordHash;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// bcrypt hashing, run on the blocking pool so request tasks keep moving.
pub struct BcryptPasswordHash {
    cost: u32,
}

impl BcryptPasswordHash {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHash {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHash for BcryptPasswordHash {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .map_err(|e| {
                DomainError::InfrastructureError(format!("Password hashing failed: {}", e))
            })
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<(), DomainError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .unwrap_or(false);

        if !matches {
            return Err(DomainError::InvalidCredential(
                "kredensial yang Anda masukkan salah".into(),
            ));
        }
        Ok(())
    }
}
