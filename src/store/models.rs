use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookmark-like record. `type` is a keyword in Rust, so the field is
/// `kind` internally and renamed on both the wire and the store side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Link {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// A daily-note record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodayEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: String,
}

/// Errors from request-body validation. Presence is checked here so a
/// bad body never reaches the store and always maps to a 400.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field '{0}' must be a non-empty string")]
    InvalidField(&'static str),
}

/// Validated Link payload, without the store-generated id
#[derive(Debug, Clone)]
pub struct LinkDraft {
    pub name: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub date: String,
}

/// Validated TodayEntry payload, without the store-generated id
#[derive(Debug, Clone)]
pub struct TodayDraft {
    pub name: String,
    pub description: String,
    pub date: String,
}

impl LinkDraft {
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let map = body.as_object().ok_or(ValidationError::NotAnObject)?;
        Ok(Self {
            name: require_string(map, "name")?,
            title: require_string(map, "title")?,
            description: require_string(map, "description")?,
            kind: require_string(map, "type")?,
            date: require_string(map, "date")?,
        })
    }
}

impl TodayDraft {
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let map = body.as_object().ok_or(ValidationError::NotAnObject)?;
        Ok(Self {
            name: require_string(map, "name")?,
            description: require_string(map, "description")?,
            date: require_string(map, "date")?,
        })
    }
}

fn require_string(map: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidField(field)),
    }
}
