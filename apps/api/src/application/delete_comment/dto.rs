use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required_string},
};
use serde_json::Value;

/// Raw delete-comment input as assembled by the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct DeleteCommentRequest {
    pub thread_id: Option<String>,
    pub comment_id: Option<String>,
    pub owner: Option<String>,
}

impl DeleteCommentRequest {
    pub const ENTITY: &'static str = "DELETE_COMMENT";

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(Self::ENTITY, value, &["threadId", "commentId", "owner"])?;
        Ok(Self {
            thread_id: reader.string("threadId")?,
            comment_id: reader.string("commentId")?,
            owner: reader.string("owner")?,
        })
    }

    pub fn validate(self) -> Result<ValidDeleteComment, DomainError> {
        Ok(ValidDeleteComment {
            thread_id: required_string(Self::ENTITY, "threadId", self.thread_id)?,
            comment_id: required_string(Self::ENTITY, "commentId", self.comment_id)?,
            owner: required_string(Self::ENTITY, "owner", self.owner)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDeleteComment {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}
