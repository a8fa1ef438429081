//! Reference Data Loader Port - Interface for reading the datasets at startup.
//!
//! Loading happens exactly once, before any query is served. The result is
//! a complete snapshot or an error; there is no partial load.

use async_trait::async_trait;

use crate::domain::reference::{ReferenceData, SnapshotError};

/// Errors that can occur while loading reference data
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {file}: {message}")]
    Io { file: String, message: String },

    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Inconsistent reference data: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Port for loading the member, survey, status and participation datasets
#[async_trait]
pub trait ReferenceDataLoader: Send + Sync {
    /// Load every dataset into one snapshot
    ///
    /// # Errors
    /// Returns `LoadError` if any dataset is unreadable or inconsistent
    async fn load(&self) -> Result<ReferenceData, LoadError>;
}
