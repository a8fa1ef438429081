//! Errors surfaced by the query operations.

use crate::domain::foundation::{ErrorCode, MemberId, SurveyId};

/// Errors that can occur while answering a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Member with id {0} not found")]
    MemberNotFound(MemberId),

    #[error("Survey with id {0} not found")]
    SurveyNotFound(SurveyId),

    /// A required status name is missing from the status dataset.
    #[error("Status '{0}' is not defined in the status reference data")]
    UnknownStatus(String),

    /// Participations reference a survey the survey dataset does not contain.
    #[error("Participations reference unknown survey {0}")]
    DanglingSurveyReference(SurveyId),
}

impl QueryError {
    /// Error code reported to API clients.
    pub fn code(&self) -> ErrorCode {
        match self {
            QueryError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            QueryError::SurveyNotFound(_) => ErrorCode::SurveyNotFound,
            QueryError::UnknownStatus(_) => ErrorCode::UnknownStatus,
            QueryError::DanglingSurveyReference(_) => ErrorCode::DanglingReference,
        }
    }

    /// Returns true when the caller asked for something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::MemberNotFound(_) | QueryError::SurveyNotFound(_)
        )
    }
}
