use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required_string},
};
use serde::Serialize;
use serde_json::Value;

/// The (comment, owner) pair whose stored presence means "liked".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLike {
    pub comment_id: String,
    pub owner: String,
}

impl CommentLike {
    pub const ENTITY: &'static str = "COMMENT_LIKE";

    pub fn new(comment_id: Option<String>, owner: Option<String>) -> Result<Self, DomainError> {
        Ok(Self {
            comment_id: required_string(Self::ENTITY, "commentId", comment_id)?,
            owner: required_string(Self::ENTITY, "owner", owner)?,
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(Self::ENTITY, value, &["commentId", "owner"])?;
        Self::new(reader.string("commentId")?, reader.string("owner")?)
    }
}
