use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

/// A panel member who can be invited to surveys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    pub email: String,
    /// Inactive members are never offered new surveys.
    pub active: bool,
}

impl Member {
    pub fn new(
        id: MemberId,
        full_name: impl Into<String>,
        email: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            active,
        }
    }
}
