//! HTTP adapter for survey endpoints.
//!
//! - `GET /api/surveys/:survey_id/members/completed` - Members who completed the survey
//! - `GET /api/surveys/:survey_id/eligible-members` - Active members still eligible
//! - `GET /api/surveys/statistics` - Per-survey outcome statistics

pub mod handlers;
pub mod routes;

pub use handlers::SurveyAppState;
pub use routes::survey_routes;
