//! Survey Insights - Member and Survey Participation Analytics
//!
//! This crate loads member, survey, status and participation reference data
//! into an immutable snapshot and answers read-only queries over it: completed
//! surveys and points per member, completed and eligible members per survey,
//! and per-survey participation statistics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
