//! HTTP handlers for member endpoints.
//!
//! These handlers connect Axum routes to the member query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};

use crate::adapters::reference::InMemoryReferenceStore;
use crate::application::handlers::{
    GetCompletedSurveysHandler, GetCompletedSurveysQuery, GetPointsHandler, GetPointsQuery,
};
use crate::application::StatusResolver;
use crate::domain::foundation::MemberId;
use crate::domain::reference::Survey;
use crate::ports::{MemberReader, ParticipationReader, SurveyReader};

use super::super::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing member query dependencies.
#[derive(Clone)]
pub struct MemberAppState {
    pub members: Arc<dyn MemberReader>,
    pub surveys: Arc<dyn SurveyReader>,
    pub participations: Arc<dyn ParticipationReader>,
    pub statuses: StatusResolver,
}

impl MemberAppState {
    /// Wires every reader to the same in-memory store.
    pub fn from_store(store: Arc<InMemoryReferenceStore>, statuses: StatusResolver) -> Self {
        Self {
            members: store.clone(),
            surveys: store.clone(),
            participations: store,
            statuses,
        }
    }

    pub fn completed_surveys_handler(&self) -> GetCompletedSurveysHandler {
        GetCompletedSurveysHandler::new(
            self.members.clone(),
            self.surveys.clone(),
            self.participations.clone(),
            self.statuses,
        )
    }

    pub fn points_handler(&self) -> GetPointsHandler {
        GetPointsHandler::new(
            self.members.clone(),
            self.surveys.clone(),
            self.participations.clone(),
            self.statuses,
        )
    }
}

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid member ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/members/:member_id/surveys/completed
///
/// Returns the surveys the member has completed.
pub async fn get_completed_surveys(
    State(state): State<MemberAppState>,
    Path(member_id): Path<String>,
) -> Result<Json<Vec<Survey>>, ApiError> {
    let query = GetCompletedSurveysQuery {
        member_id: parse_member_id(&member_id)?,
    };

    let surveys = state.completed_surveys_handler().handle(query)?;
    Ok(Json(surveys))
}

/// GET /api/members/:member_id/points
///
/// Returns the member's total points as a bare integer.
pub async fn get_points(
    State(state): State<MemberAppState>,
    Path(member_id): Path<String>,
) -> Result<Json<i64>, ApiError> {
    let query = GetPointsQuery {
        member_id: parse_member_id(&member_id)?,
    };

    let points = state.points_handler().handle(query)?;
    Ok(Json(points))
}
