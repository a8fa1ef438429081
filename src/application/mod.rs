//! Application layer - Queries and Handlers.
//!
//! This layer answers read-only questions by coordinating the reader ports.
//! Every handler is a pure function of the snapshot and its query.

pub mod handlers;
mod status_resolver;

pub use handlers::{
    GetCompletedMembersHandler, GetCompletedMembersQuery, GetCompletedSurveysHandler,
    GetCompletedSurveysQuery, GetEligibleMembersHandler, GetEligibleMembersQuery,
    GetPointsHandler, GetPointsQuery, GetStatisticsHandler, GetStatisticsQuery,
};
pub use status_resolver::StatusResolver;
