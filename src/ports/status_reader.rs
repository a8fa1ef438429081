use crate::domain::foundation::StatusId;

use super::QueryError;

/// Read-only port over the status dataset
pub trait StatusReader: Send + Sync {
    /// Resolves a status name to its identifier
    ///
    /// # Errors
    /// Returns `QueryError::UnknownStatus` if no status carries this name
    fn id_for_name(&self, name: &str) -> Result<StatusId, QueryError>;
}
