//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location and strictness of the reference datasets
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding Members.csv, Surveys.csv, Statuses.csv and Participation.csv
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// Refuse to start unless every well-known status is defined
    #[serde(default = "default_require_all_statuses")]
    pub require_all_statuses: bool,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.base_path"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            require_all_statuses: default_require_all_statuses(),
        }
    }
}

fn default_base_path() -> PathBuf {
    PathBuf::from("data")
}

fn default_require_all_statuses() -> bool {
    true
}
