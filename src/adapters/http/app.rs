//! Top-level router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::reference::InMemoryReferenceStore;
use crate::application::StatusResolver;
use crate::config::ServerConfig;

use super::health::health_routes;
use super::member::{member_routes, MemberAppState};
use super::survey::{survey_routes, SurveyAppState};

/// Builds the full API router over one reference snapshot.
pub fn app_router(
    store: Arc<InMemoryReferenceStore>,
    statuses: StatusResolver,
    server: &ServerConfig,
) -> Router {
    let mut router = Router::new()
        .merge(member_routes(MemberAppState::from_store(store.clone(), statuses)))
        .merge(survey_routes(SurveyAppState::from_store(store.clone(), statuses)))
        .merge(health_routes(store.snapshot().clone()))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if !origins.is_empty() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET]),
        );
    }

    router
}
