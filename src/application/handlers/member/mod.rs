//! Member query handlers.
//!
//! Read-only handlers answering questions about a single member.

mod get_completed_surveys;
mod get_points;

pub use get_completed_surveys::{
    GetCompletedSurveysHandler, GetCompletedSurveysQuery, GetCompletedSurveysResult,
};
pub use get_points::{GetPointsHandler, GetPointsQuery, GetPointsResult};
