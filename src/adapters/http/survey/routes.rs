//! HTTP routes for survey endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_completed_members, get_eligible_members, get_statistics, SurveyAppState};

/// Creates the survey router with all routes.
pub fn survey_routes(state: SurveyAppState) -> Router {
    Router::new()
        // GET /api/surveys/statistics
        .route("/api/surveys/statistics", get(get_statistics))
        // GET /api/surveys/:survey_id/members/completed
        .route("/api/surveys/:survey_id/members/completed", get(get_completed_members))
        // GET /api/surveys/:survey_id/eligible-members
        .route("/api/surveys/:survey_id/eligible-members", get(get_eligible_members))
        .with_state(state)
}
