use super::entity::{AddThread, AddedThread, ThreadDetail};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, DomainError>;
    async fn verify_thread_availability(&self, thread_id: &str) -> Result<(), DomainError>;
    /// Thread header only; comments are empty.
    async fn get_detail_thread(&self, thread_id: &str) -> Result<ThreadDetail, DomainError>;
}
