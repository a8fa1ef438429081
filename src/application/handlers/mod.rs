//! Application handlers.
//!
//! Query handlers that answer questions over the reference snapshot.

pub mod member;
pub mod survey;

#[cfg(test)]
pub(crate) mod test_support;

pub use member::{
    GetCompletedSurveysHandler, GetCompletedSurveysQuery, GetCompletedSurveysResult,
    GetPointsHandler, GetPointsQuery, GetPointsResult,
};
pub use survey::{
    GetCompletedMembersHandler, GetCompletedMembersQuery, GetCompletedMembersResult,
    GetEligibleMembersHandler, GetEligibleMembersQuery, GetEligibleMembersResult,
    GetStatisticsHandler, GetStatisticsQuery, GetStatisticsResult,
};
