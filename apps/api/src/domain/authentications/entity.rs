use crate::domain::shared::{errors::DomainError, payload::required_string};
use serde::Serialize;
use ts_rs::TS;

/// Token pair handed out on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuth {
    pub const ENTITY: &'static str = "NEW_AUTH";

    pub fn new(
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            access_token: required_string(Self::ENTITY, "accessToken", access_token)?,
            refresh_token: required_string(Self::ENTITY, "refreshToken", refresh_token)?,
        })
    }
}
