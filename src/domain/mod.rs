//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status kinds, errors)
//! - `reference` - Members, surveys, statuses, participations and the
//!   immutable snapshot holding them
//! - `statistics` - Pure aggregation of participations into per-survey summaries

pub mod foundation;
pub mod reference;
pub mod statistics;
