//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the well-known status kinds, and error types
//! that form the vocabulary of the survey domain.

mod errors;
mod ids;
mod status_kind;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{MemberId, StatusId, SurveyId};
pub use status_kind::StatusKind;
