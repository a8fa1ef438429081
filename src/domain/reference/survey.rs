use serde::{Deserialize, Serialize};

use crate::domain::foundation::SurveyId;

/// A survey members can participate in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: SurveyId,
    pub name: String,
    pub expected_completes: i32,
    /// Points awarded for a completed participation.
    pub completion_points: i32,
    /// Points awarded when the member was screened out.
    #[serde(rename = "filteredPoint")]
    pub filtered_points: i32,
}

impl Survey {
    pub fn new(
        id: SurveyId,
        name: impl Into<String>,
        expected_completes: i32,
        completion_points: i32,
        filtered_points: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            expected_completes,
            completion_points,
            filtered_points,
        }
    }

    /// Points earned by a participation, completed or filtered.
    pub fn points(&self, is_completed: bool) -> i32 {
        if is_completed {
            self.completion_points
        } else {
            self.filtered_points
        }
    }
}
