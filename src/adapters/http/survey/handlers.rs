//! HTTP handlers for survey endpoints.
//!
//! These handlers connect Axum routes to the survey query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};

use crate::adapters::reference::InMemoryReferenceStore;
use crate::application::handlers::{
    GetCompletedMembersHandler, GetCompletedMembersQuery, GetEligibleMembersHandler,
    GetEligibleMembersQuery, GetStatisticsHandler, GetStatisticsQuery,
};
use crate::application::StatusResolver;
use crate::domain::foundation::SurveyId;
use crate::domain::reference::Member;
use crate::domain::statistics::SurveyStatistic;
use crate::ports::{MemberReader, ParticipationReader, SurveyReader};

use super::super::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing survey query dependencies.
#[derive(Clone)]
pub struct SurveyAppState {
    pub members: Arc<dyn MemberReader>,
    pub surveys: Arc<dyn SurveyReader>,
    pub participations: Arc<dyn ParticipationReader>,
    pub statuses: StatusResolver,
}

impl SurveyAppState {
    /// Wires every reader to the same in-memory store.
    pub fn from_store(store: Arc<InMemoryReferenceStore>, statuses: StatusResolver) -> Self {
        Self {
            members: store.clone(),
            surveys: store.clone(),
            participations: store,
            statuses,
        }
    }

    pub fn completed_members_handler(&self) -> GetCompletedMembersHandler {
        GetCompletedMembersHandler::new(
            self.members.clone(),
            self.surveys.clone(),
            self.participations.clone(),
            self.statuses,
        )
    }

    pub fn eligible_members_handler(&self) -> GetEligibleMembersHandler {
        GetEligibleMembersHandler::new(
            self.members.clone(),
            self.participations.clone(),
            self.statuses,
        )
    }

    pub fn statistics_handler(&self) -> GetStatisticsHandler {
        GetStatisticsHandler::new(
            self.surveys.clone(),
            self.participations.clone(),
            self.statuses,
        )
    }
}

fn parse_survey_id(raw: &str) -> Result<SurveyId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid survey ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/surveys/:survey_id/members/completed
///
/// Returns the members who completed the survey.
pub async fn get_completed_members(
    State(state): State<SurveyAppState>,
    Path(survey_id): Path<String>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let query = GetCompletedMembersQuery {
        survey_id: parse_survey_id(&survey_id)?,
    };

    let members = state.completed_members_handler().handle(query)?;
    Ok(Json(members))
}

/// GET /api/surveys/:survey_id/eligible-members
///
/// Returns the active members who can still be invited to the survey.
pub async fn get_eligible_members(
    State(state): State<SurveyAppState>,
    Path(survey_id): Path<String>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let query = GetEligibleMembersQuery {
        survey_id: parse_survey_id(&survey_id)?,
    };

    let members = state.eligible_members_handler().handle(query)?;
    Ok(Json(members))
}

/// GET /api/surveys/statistics
///
/// Returns completion statistics for every survey with participations.
pub async fn get_statistics(
    State(state): State<SurveyAppState>,
) -> Result<Json<Vec<SurveyStatistic>>, ApiError> {
    let statistics = state.statistics_handler().handle(GetStatisticsQuery)?;
    Ok(Json(statistics))
}
