//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes carried by API error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors
    BadRequest,

    // Not found errors
    MemberNotFound,
    SurveyNotFound,

    // Reference data errors
    UnknownStatus,
    DanglingReference,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::SurveyNotFound => "SURVEY_NOT_FOUND",
            ErrorCode::UnknownStatus => "UNKNOWN_STATUS",
            ErrorCode::DanglingReference => "DANGLING_REFERENCE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
