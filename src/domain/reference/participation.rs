use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, StatusId, SurveyId};

/// One recorded interaction between a member and a survey.
///
/// A member may have any number of rows for the same survey; every row
/// counts on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub member_id: MemberId,
    pub survey_id: SurveyId,
    pub status: StatusId,
    /// Length of the response, when one was recorded.
    pub length: Option<i32>,
}

impl Participation {
    pub fn new(
        member_id: MemberId,
        survey_id: SurveyId,
        status: StatusId,
        length: Option<i32>,
    ) -> Self {
        Self {
            member_id,
            survey_id,
            status,
            length,
        }
    }
}
