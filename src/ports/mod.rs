//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the query handlers and the reference data. Adapters implement these ports.
//!
//! ## Reader Ports
//!
//! - `MemberReader` - Member lookups and full member snapshot
//! - `SurveyReader` - Survey lookups, point values and names
//! - `ParticipationReader` - Full participation scan
//! - `StatusReader` - Status name to identifier resolution
//!
//! ## Loader Port
//!
//! - `ReferenceDataLoader` - One-shot load of all datasets at startup

mod member_reader;
mod participation_reader;
mod query_error;
mod reference_data_loader;
mod status_reader;
mod survey_reader;

pub use member_reader::MemberReader;
pub use participation_reader::ParticipationReader;
pub use query_error::QueryError;
pub use reference_data_loader::{LoadError, ReferenceDataLoader};
pub use status_reader::StatusReader;
pub use survey_reader::SurveyReader;
