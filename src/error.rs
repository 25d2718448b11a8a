// src/error.rs

//! Error types for the classification model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// A raw token matched none of the literals of its enumeration.
    #[error("invalid {field} token: {token:?}")]
    InvalidClassificationToken { field: &'static str, token: String },
}

pub type ClassificationResult<T> = Result<T, ClassificationError>;

impl ClassificationError {
    pub fn invalid_token(field: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidClassificationToken {
            field,
            token: token.into(),
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidClassificationToken { field, .. } => *field,
        }
    }

    /// The offending raw token, verbatim.
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidClassificationToken { token, .. } => token,
        }
    }
}
