use crate::domain::{
    shared::errors::DomainError,
    threads::{
        entity::{AddThread, AddThreadPayload, AddedThread},
        repository::ThreadRepository,
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[instrument(skip(self, payload), fields(owner = ?payload.owner))]
    pub async fn execute(&self, payload: AddThreadPayload) -> Result<AddedThread, DomainError> {
        let thread = AddThread::new(payload)?;
        let added = self.thread_repository.add_thread(&thread).await?;
        info!(thread_id = %added.id, "thread created");
        Ok(added)
    }
}
