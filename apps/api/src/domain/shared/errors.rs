use thiserror::Error;

/// Failure taxonomy shared by entities, repositories and use cases.
///
/// Validation variants are raised while constructing entities; `NotFound` and
/// `Forbidden` come back from repositories. Use cases pass every variant through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity}.NOT_CONTAIN_NEEDED_PROPERTY: `{field}` is required")]
    MissingField { entity: String, field: String },
    #[error("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION: `{field}` has the wrong type")]
    InvalidType { entity: String, field: String },
    #[error("username must not exceed 50 characters")]
    UsernameTooLong,
    #[error("username contains restricted characters")]
    UsernameRestrictedChars,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    pub fn missing(entity: &str, field: &str) -> Self {
        Self::MissingField {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_type(entity: &str, field: &str) -> Self {
        Self::InvalidType {
            entity: entity.to_string(),
            field: field.to_string(),
        }
    }

    /// True for the variants produced by payload validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidType { .. }
                | Self::UsernameTooLong
                | Self::UsernameRestrictedChars
        )
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::InfrastructureError(err.to_string())
    }
}
