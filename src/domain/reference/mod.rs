//! Reference data - the entities loaded from the survey panel datasets.

mod member;
mod participation;
mod snapshot;
mod status;
mod survey;

pub use member::Member;
pub use participation::Participation;
pub use snapshot::{ReferenceData, SnapshotError};
pub use status::Status;
pub use survey::Survey;
