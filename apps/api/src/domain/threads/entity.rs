use crate::domain::comments::entity::DetailComment;
use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required, required_string},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

#[derive(Debug, Clone, Default)]
pub struct AddThreadPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub owner: Option<String>,
}

impl AddThreadPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(AddThread::ENTITY, value, &["title", "body", "owner"])?;
        Ok(Self {
            title: reader.string("title")?,
            body: reader.string("body")?,
            owner: reader.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    pub const ENTITY: &'static str = "ADD_THREAD";

    pub fn new(payload: AddThreadPayload) -> Result<Self, DomainError> {
        Ok(Self {
            title: required_string(Self::ENTITY, "title", payload.title)?,
            body: required_string(Self::ENTITY, "body", payload.body)?,
            owner: required_string(Self::ENTITY, "owner", payload.owner)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub const ENTITY: &'static str = "ADDED_THREAD";

    pub fn new(
        id: Option<String>,
        title: Option<String>,
        owner: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: required_string(Self::ENTITY, "id", id)?,
            title: required_string(Self::ENTITY, "title", title)?,
            owner: required_string(Self::ENTITY, "owner", owner)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreadDetailPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub username: Option<String>,
    pub comments: Option<Vec<DetailComment>>,
}

impl ThreadDetailPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            ThreadDetail::ENTITY,
            value,
            &["id", "title", "body", "date", "username"],
        )?;

        let id = reader.string("id")?;
        let title = reader.string("title")?;
        let body = reader.string("body")?;
        let date = reader.date("date")?;
        let username = reader.string("username")?;
        let comments = reader
            .array("comments")?
            .map(|items| {
                items
                    .iter()
                    .map(DetailComment::from_json)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            id,
            title,
            body,
            date,
            username,
            comments,
        })
    }
}

/// A thread with its comments, their replies and like counts.
///
/// The header fields are fixed at construction. Comments are loaded in a
/// second pass and attached with [`ThreadDetail::with_comments`].
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ThreadDetail {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
    comments: Vec<DetailComment>,
}

impl ThreadDetail {
    pub const ENTITY: &'static str = "THREAD_DETAIL";

    pub fn new(payload: ThreadDetailPayload) -> Result<Self, DomainError> {
        Ok(Self {
            id: required_string(Self::ENTITY, "id", payload.id)?,
            title: required_string(Self::ENTITY, "title", payload.title)?,
            body: required_string(Self::ENTITY, "body", payload.body)?,
            date: required(Self::ENTITY, "date", payload.date)?,
            username: required_string(Self::ENTITY, "username", payload.username)?,
            comments: payload.comments.unwrap_or_default(),
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        Self::new(ThreadDetailPayload::from_json(value)?)
    }

    pub fn with_comments(self, comments: Vec<DetailComment>) -> Self {
        Self { comments, ..self }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[DetailComment] {
        &self.comments
    }
}
