//! HTTP routes for member endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_completed_surveys, get_points, MemberAppState};

/// Creates the member router with all routes.
pub fn member_routes(state: MemberAppState) -> Router {
    Router::new()
        // GET /api/members/:member_id/surveys/completed
        .route("/api/members/:member_id/surveys/completed", get(get_completed_surveys))
        // GET /api/members/:member_id/points
        .route("/api/members/:member_id/points", get(get_points))
        .with_state(state)
}
