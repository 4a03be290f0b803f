use super::value_objects::Username;
use crate::domain::shared::{
    errors::DomainError,
    payload::{PayloadReader, required_string},
};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

#[derive(Debug, Clone, Default)]
pub struct RegisterUserPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub fullname: Option<String>,
}

impl RegisterUserPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(
            RegisterUser::ENTITY,
            value,
            &["username", "password", "fullname"],
        )?;
        Ok(Self {
            username: reader.string("username")?,
            password: reader.string("password")?,
            fullname: reader.string("fullname")?,
        })
    }
}

/// A sign-up request that passed validation. `password` is still plain text.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub const ENTITY: &'static str = "REGISTER_USER";

    pub fn new(payload: RegisterUserPayload) -> Result<Self, DomainError> {
        let username = required_string(Self::ENTITY, "username", payload.username)?;
        let password = required_string(Self::ENTITY, "password", payload.password)?;
        let fullname = required_string(Self::ENTITY, "fullname", payload.fullname)?;

        let username = Username::new(username)?.into_inner();

        Ok(Self {
            username,
            password,
            fullname,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    pub const ENTITY: &'static str = "REGISTERED_USER";

    pub fn new(
        id: Option<String>,
        username: Option<String>,
        fullname: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: required_string(Self::ENTITY, "id", id)?,
            username: required_string(Self::ENTITY, "username", username)?,
            fullname: required_string(Self::ENTITY, "fullname", fullname)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserLoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserLoginPayload {
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let reader = PayloadReader::new(UserLogin::ENTITY, value, &["username", "password"])?;
        Ok(Self {
            username: reader.string("username")?,
            password: reader.string("password")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub const ENTITY: &'static str = "USER_LOGIN";

    pub fn new(payload: UserLoginPayload) -> Result<Self, DomainError> {
        Ok(Self {
            username: required_string(Self::ENTITY, "username", payload.username)?,
            password: required_string(Self::ENTITY, "password", payload.password)?,
        })
    }
}
