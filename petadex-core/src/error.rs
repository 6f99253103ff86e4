use serde::Serialize;

/// A lookup capability failed to answer. Never to be confused with a missing row.
#[derive(thiserror::Error, Debug, Serialize, Clone, PartialEq)]
#[error("{source_name} is unavailable: {message}")]
pub struct SourceError {
    pub source_name: String,
    pub message: String,
}

impl SourceError {
    pub fn new(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Error {
    #[error("{entity} {key} not found")]
    NotFound { entity: String, key: String },
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),
}

impl Error {
    pub(crate) fn not_found(entity: &str, key: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
