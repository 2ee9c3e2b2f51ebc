use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "camelCase")]
pub enum ModelError {
    /// A value was present but outside the domain the computation accepts.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
    /// A coded value (grade, unit, position) could not be recognised.
    #[error("unknown {kind} '{value}'")]
    UnknownValue { kind: String, value: String },
}

impl ModelError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unknown_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Field name for input errors, coded-value kind otherwise.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } => field,
            Self::UnknownValue { kind, .. } => kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
