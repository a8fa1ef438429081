//! Health endpoint reporting the loaded dataset sizes.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::domain::reference::ReferenceData;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub members: usize,
    pub surveys: usize,
    pub statuses: usize,
    pub participations: usize,
}

async fn health(State(data): State<Arc<ReferenceData>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        members: data.member_count(),
        surveys: data.survey_count(),
        statuses: data.status_count(),
        participations: data.participation_count(),
    })
}

/// Creates the health router.
pub fn health_routes(data: Arc<ReferenceData>) -> Router {
    Router::new().route("/health", get(health)).with_state(data)
}
