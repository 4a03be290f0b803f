use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required_string},
};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct DeleteReplyRequest {
    pub thread_id: Option<String>,
    pub comment_id: Option<String>,
    pub reply_id: Option<String>,
    pub owner: Option<String>,
}

impl DeleteReplyRequest {
    pub const ENTITY: &'static str = "DELETE_REPLY";

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            Self::ENTITY,
            value,
            &["threadId", "commentId", "replyId", "owner"],
        )?;
        Ok(Self {
            thread_id: reader.string("threadId")?,
            comment_id: reader.string("commentId")?,
            reply_id: reader.string("replyId")?,
            owner: reader.string("owner")?,
        })
    }

    pub fn validate(self) -> Result<ValidDeleteReply, DomainError> {
        Ok(ValidDeleteReply {
            thread_id: required_string(Self::ENTITY, "threadId", self.thread_id)?,
            comment_id: required_string(Self::ENTITY, "commentId", self.comment_id)?,
            reply_id: required_string(Self::ENTITY, "replyId", self.reply_id)?,
            owner: required_string(Self::ENTITY, "owner", self.owner)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDeleteReply {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}
