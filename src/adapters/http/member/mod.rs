//! HTTP adapter for member endpoints.
//!
//! - `GET /api/members/:member_id/surveys/completed` - Surveys the member completed
//! - `GET /api/members/:member_id/points` - Member's total points

pub mod handlers;
pub mod routes;

pub use handlers::MemberAppState;
pub use routes::member_routes;
