//! Field access helpers for raw entity payloads.
//!
//! A field counts as missing when it is absent, `null`, an empty string or the
//! number zero. Booleans are never missing, so `isDeleted: false` is accepted.
//! Presence of every required field is checked before any type check.

use super::errors::DomainError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Unwraps a required typed field.
pub fn required<T>(entity: &str, field: &str, value: Option<T>) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::missing(entity, field))
}

/// Unwraps a required string field, treating `""` as absent.
pub fn required_string(
    entity: &str,
    field: &str,
    value: Option<String>,
) -> Result<String, DomainError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(DomainError::missing(entity, field)),
    }
}

/// Typed view over one JSON object payload.
pub struct PayloadReader<'a> {
    entity: &'static str,
    object: &'a Map<String, Value>,
}

impl<'a> PayloadReader<'a> {
    pub fn new(
        entity: &'static str,
        value: &'a Value,
        required: &[&'static str],
    ) -> Result<Self, DomainError> {
        let Some(object) = value.as_object() else {
            let field = required.first().copied().unwrap_or("payload");
            return Err(DomainError::missing(entity, field));
        };

        if let Some(field) = required.iter().find(|f| is_missing(object.get(**f))) {
            return Err(DomainError::missing(entity, field));
        }

        Ok(Self { entity, object })
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    pub fn string(&self, field: &'static str) -> Result<Option<String>, DomainError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(DomainError::invalid_type(self.entity, field)),
        }
    }

    pub fn boolean(&self, field: &'static str) -> Result<Option<bool>, DomainError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(DomainError::invalid_type(self.entity, field)),
        }
    }

    /// RFC 3339 timestamp string.
    pub fn date(&self, field: &'static str) -> Result<Option<DateTime<Utc>>, DomainError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|d| Some(d.with_timezone(&Utc)))
                .map_err(|_| DomainError::invalid_type(self.entity, field)),
            Some(_) => Err(DomainError::invalid_type(self.entity, field)),
        }
    }

    /// Non-negative integer.
    pub fn count(&self, field: &'static str) -> Result<Option<i64>, DomainError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) if v >= 0 => Ok(Some(v)),
                _ => Err(DomainError::invalid_type(self.entity, field)),
            },
            Some(_) => Err(DomainError::invalid_type(self.entity, field)),
        }
    }

    pub fn array(&self, field: &'static str) -> Result<Option<&'a Vec<Value>>, DomainError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(DomainError::invalid_type(self.entity, field)),
        }
    }
}
