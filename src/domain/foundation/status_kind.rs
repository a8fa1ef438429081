//! StatusKind enum naming the participation statuses the queries depend on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Well-known participation statuses.
///
/// The status reference dataset assigns each of these an opaque
/// [`StatusId`](super::StatusId); the name is the only stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Completed,
    Filtered,
    Rejected,
    NotAsked,
}

impl StatusKind {
    /// Every well-known status, in table order.
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Completed,
        StatusKind::Filtered,
        StatusKind::Rejected,
        StatusKind::NotAsked,
    ];

    /// Name of the status as it appears in the status dataset.
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Completed => "Completed",
            StatusKind::Filtered => "Filtered",
            StatusKind::Rejected => "Rejected",
            StatusKind::NotAsked => "Not asked",
        }
    }

    /// Position of this kind in [`StatusKind::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            StatusKind::Completed => 0,
            StatusKind::Filtered => 1,
            StatusKind::Rejected => 2,
            StatusKind::NotAsked => 3,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StatusKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown status name '{}'", s)))
    }
}
