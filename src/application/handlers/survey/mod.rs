//! Survey query handlers.
//!
//! Read-only handlers for survey completers, eligibility and statistics.

mod get_completed_members;
mod get_eligible_members;
mod get_statistics;

pub use get_completed_members::{
    GetCompletedMembersHandler, GetCompletedMembersQuery, GetCompletedMembersResult,
};
pub use get_eligible_members::{
    GetEligibleMembersHandler, GetEligibleMembersQuery, GetEligibleMembersResult,
};
pub use get_statistics::{GetStatisticsHandler, GetStatisticsQuery, GetStatisticsResult};
