use crate::domain::replies::entity::DetailReply;
use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required, required_string},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Shown instead of the content of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

#[derive(Debug, Clone, Default)]
pub struct AddCommentPayload {
    pub thread_id: Option<String>,
    pub content: Option<String>,
    pub owner: Option<String>,
}

impl AddCommentPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader =
            PayloadReader::new(AddComment::ENTITY, value, &["threadId", "content", "owner"])?;
        Ok(Self {
            thread_id: reader.string("threadId")?,
            content: reader.string("content")?,
            owner: reader.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

impl AddComment {
    pub const ENTITY: &'static str = "ADD_COMMENT";

    pub fn new(payload: AddCommentPayload) -> Result<Self, DomainError> {
        Ok(Self {
            thread_id: required_string(Self::ENTITY, "threadId", payload.thread_id)?,
            content: required_string(Self::ENTITY, "content", payload.content)?,
            owner: required_string(Self::ENTITY, "owner", payload.owner)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub const ENTITY: &'static str = "ADDED_COMMENT";

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
pub struct DetailCommentPayload {
    pub id: Option<String>,
    pub username: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub is_deleted: Option<bool>,
    pub replies: Option<Vec<DetailReply>>,
    pub like_count: Option<i64>,
}

impl DetailCommentPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            DetailComment::ENTITY,
            value,
            &["id", "username", "date", "content", "isDeleted"],
        )?;

        let id = reader.string("id")?;
        let username = reader.string("username")?;
        let date = reader.date("date")?;
        let content = reader.string("content")?;
        let is_deleted = reader.boolean("isDeleted")?;
        let replies = reader.array("replies")?;
        let like_count = reader.count("likeCount")?;

        let replies = replies
            .map(|items| {
                items
                    .iter()
                    .map(DetailReply::from_json)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            id,
            username,
            date,
            content,
            is_deleted,
            replies,
            like_count,
        })
    }
}

/// A comment as shown inside a thread detail, with its replies and like count.
///
/// Soft-deleted comments carry [`DELETED_COMMENT_CONTENT`] from construction on;
/// the stored text never reaches this type. Replies and the like count are
/// attached by the consuming `with_*` builders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailComment {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    #[serde(skip)]
    is_deleted: bool,
    like_count: i64,
    replies: Vec<DetailReply>,
}

impl DetailComment {
    pub const ENTITY: &'static str = "DETAIL_COMMENT";

    pub fn new(payload: DetailCommentPayload) -> Result<Self, DomainError> {
        let id = required_string(Self::ENTITY, "id", payload.id)?;
        let username = required_string(Self::ENTITY, "username", payload.username)?;
        let date = required(Self::ENTITY, "date", payload.date)?;
        let content = required_string(Self::ENTITY, "content", payload.content)?;
        let is_deleted = required(Self::ENTITY, "isDeleted", payload.is_deleted)?;

        let like_count = payload.like_count.unwrap_or(0);
        if like_count < 0 {
            return Err(DomainError::invalid_type(Self::ENTITY, "likeCount"));
        }

        Ok(Self {
            id,
            username,
            date,
            content: if is_deleted {
                DELETED_COMMENT_CONTENT.to_string()
            } else {
                content
            },
            is_deleted,
            like_count,
            replies: payload.replies.unwrap_or_default(),
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        Self::new(DetailCommentPayload::from_json(value)?)
    }

    pub fn with_replies(self, replies: Vec<DetailReply>) -> Self {
        Self { replies, ..self }
    }

    pub fn with_like_count(self, like_count: i64) -> Self {
        Self {
            like_count: like_count.max(0),
            ..self
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn like_count(&self) -> i64 {
        self.like_count
    }

    pub fn replies(&self) -> &[DetailReply] {
        &self.replies
    }
}
