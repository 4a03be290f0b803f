use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required_string},
};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct RefreshAuthenticationRequest {
    pub refresh_token: Option<String>,
}

impl RefreshAuthenticationRequest {
    pub const ENTITY: &'static str = "REFRESH_AUTHENTICATION";

    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(Self::ENTITY, value, &["refreshToken"])?;
        Ok(Self {
            refresh_token: reader.string("refreshToken")?,
        })
    }

    pub fn refresh_token(self) -> Result<String, DomainError> {
        required_string(Self::ENTITY, "refreshToken", self.refresh_token)
    }
}
