use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required, required_string},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Shown instead of the content of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

#[derive(Debug, Clone, Default)]
pub struct AddReplyPayload {
    pub thread_id: Option<String>,
    pub comment_id: Option<String>,
    pub content: Option<String>,
    pub owner: Option<String>,
}

impl AddReplyPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            AddReply::ENTITY,
            value,
            &["threadId", "commentId", "content", "owner"],
        )?;
        Ok(Self {
            thread_id: reader.string("threadId")?,
            comment_id: reader.string("commentId")?,
            content: reader.string("content")?,
            owner: reader.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
    pub thread_id: String,
    pub comment_id: String,
    pub content: String,
    pub owner: String,
}

impl AddReply {
    pub const ENTITY: &'static str = "ADD_REPLY";

    pub fn new(payload: AddReplyPayload) -> Result<Self, DomainError> {
        Ok(Self {
            thread_id: required_string(Self::ENTITY, "threadId", payload.thread_id)?,
            comment_id: required_string(Self::ENTITY, "commentId", payload.comment_id)?,
            content: required_string(Self::ENTITY, "content", payload.content)?,
            owner: required_string(Self::ENTITY, "owner", payload.owner)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub const ENTITY: &'static str = "ADDED_REPLY";

    pub fn new(
        id: Option<String>,
        content: Option<String>,
        owner: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: required_string(Self::ENTITY, "id", id)?,
            content: required_string(Self::ENTITY, "content", content)?,
            owner: required_string(Self::ENTITY, "owner", owner)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailReplyPayload {
    pub id: Option<String>,
    pub username: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub is_deleted: Option<bool>,
    /// Parent comment, only used to group replies under their comment.
    pub comment_id: Option<String>,
}

impl DetailReplyPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            DetailReply::ENTITY,
            value,
            &["id", "content", "date", "username", "isDeleted"],
        )?;
        Ok(Self {
            id: reader.string("id")?,
            username: reader.string("username")?,
            date: reader.date("date")?,
            content: reader.string("content")?,
            is_deleted: reader.boolean("isDeleted")?,
            comment_id: reader.string("commentId")?,
        })
    }
}

/// A reply as shown inside a thread detail.
///
/// When the reply is soft-deleted its content is replaced by
/// [`DELETED_REPLY_CONTENT`] at construction and the original text is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DetailReply {
    id: String,
    content: String,
    date: DateTime<Utc>,
    username: String,
    #[serde(skip)]
    is_deleted: bool,
    #[serde(skip)]
    comment_id: Option<String>,
}

impl DetailReply {
    pub const ENTITY: &'static str = "DETAIL_REPLY";

    pub fn new(payload: DetailReplyPayload) -> Result<Self, DomainError> {
        let id = required_string(Self::ENTITY, "id", payload.id)?;
        let content = required_string(Self::ENTITY, "content", payload.content)?;
        let date = required(Self::ENTITY, "date", payload.date)?;
        let username = required_string(Self::ENTITY, "username", payload.username)?;
        let is_deleted = required(Self::ENTITY, "isDeleted", payload.is_deleted)?;

        Ok(Self {
            id,
            content: if is_deleted {
                DELETED_REPLY_CONTENT.to_string()
            } else {
                content
            },
            date,
            username,
            is_deleted,
            comment_id: payload.comment_id,
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        Self::new(DetailReplyPayload::from_json(value)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn comment_id(&self) -> Option<&str> {
        self.comment_id.as_deref()
    }
}
