//! StatusResolver - maps well-known status kinds to their identifiers.
//!
//! The status dataset is read once when the resolver is built. A missing
//! status is remembered and reported as `UnknownStatus` by every query that
//! needs it.

use crate::domain::foundation::{StatusId, StatusKind};
use crate::ports::{QueryError, StatusReader};

/// Fixed lookup table from [`StatusKind`] to [`StatusId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolver {
    ids: [Option<StatusId>; 4],
}

impl StatusResolver {
    /// Resolves every well-known kind against the status dataset.
    pub fn new(reader: &dyn StatusReader) -> Self {
        let mut ids = [None; 4];
        for kind in StatusKind::ALL {
            match reader.id_for_name(kind.name()) {
                Ok(id) => ids[kind.index()] = Some(id),
                Err(err) => tracing::warn!(status = %kind, "Status unavailable: {}", err),
            }
        }
        Self { ids }
    }

    /// Identifier of the given status.
    ///
    /// # Errors
    /// Returns `QueryError::UnknownStatus` if the status dataset lacks it
    pub fn resolve(&self, kind: StatusKind) -> Result<StatusId, QueryError> {
        self.ids[kind.index()].ok_or_else(|| QueryError::UnknownStatus(kind.name().to_string()))
    }

    /// Fails on the first well-known status the dataset lacks.
    pub fn require_all(&self) -> Result<(), QueryError> {
        for kind in StatusKind::ALL {
            self.resolve(kind)?;
        }
        Ok(())
    }
}
