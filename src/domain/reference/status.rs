use serde::{Deserialize, Serialize};

use crate::domain::foundation::StatusId;

/// A named participation status from the status dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
}

impl Status {
    pub fn new(id: StatusId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
