//! HTTP adapters - REST API implementations.
//!
//! Each query area has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod error;
pub mod health;
pub mod member;
pub mod survey;

// Re-export key types for convenience
pub use app::app_router;
pub use error::{ApiError, ErrorResponse};
pub use member::{member_routes, MemberAppState};
pub use survey::{survey_routes, SurveyAppState};
