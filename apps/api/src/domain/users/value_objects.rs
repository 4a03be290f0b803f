use crate::domain::shared::errors::DomainError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern compiles");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Username {
    #[validate(length(max = 50), regex(path = *USERNAME_REGEX))]
    pub value: String,
}

impl Username {
    /// Length is checked before the character set.
    pub fn new(value: String) -> Result<Self, DomainError> {
        let username = Self { value };
        if let Err(errors) = username.validate() {
            let too_long = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .any(|e| e.code == "length");
            return Err(if too_long {
                DomainError::UsernameTooLong
            } else {
                DomainError::UsernameRestrictedChars
            });
        }
        Ok(username)
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}
