//! Row types for the reference CSV files.
//!
//! Column headers are the ones used by the panel export; each record maps
//! to exactly one domain entity.

use serde::{Deserialize, Deserializer};

use crate::domain::foundation::{MemberId, StatusId, SurveyId};
use crate::domain::reference::{Member, Participation, Status, Survey};

#[derive(Debug, Deserialize)]
pub(crate) struct MemberRecord {
    #[serde(rename = "Member Id")]
    id: i64,
    #[serde(rename = "Full name")]
    full_name: String,
    #[serde(rename = "E-mail address")]
    email: String,
    #[serde(rename = "Is Active", deserialize_with = "deserialize_flag")]
    active: bool,
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Member::new(MemberId::new(record.id), record.full_name, record.email, record.active)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SurveyRecord {
    #[serde(rename = "Survey Id")]
    id: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Expected completes")]
    expected_completes: i32,
    #[serde(rename = "Completion points")]
    completion_points: i32,
    #[serde(rename = "Filtered points")]
    filtered_points: i32,
}

impl From<SurveyRecord> for Survey {
    fn from(record: SurveyRecord) -> Self {
        Survey::new(
            SurveyId::new(record.id),
            record.name,
            record.expected_completes,
            record.completion_points,
            record.filtered_points,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusRecord {
    #[serde(rename = "Status Id")]
    id: i64,
    #[serde(rename = "Name")]
    name: String,
}

impl From<StatusRecord> for Status {
    fn from(record: StatusRecord) -> Self {
        Status::new(StatusId::new(record.id), record.name)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParticipationRecord {
    #[serde(rename = "Member Id")]
    member_id: i64,
    #[serde(rename = "Survey Id")]
    survey_id: i64,
    #[serde(rename = "Status")]
    status: i64,
    #[serde(rename = "Length")]
    length: Option<i32>,
}

impl From<ParticipationRecord> for Participation {
    fn from(record: ParticipationRecord) -> Self {
        Participation::new(
            MemberId::new(record.member_id),
            SurveyId::new(record.survey_id),
            StatusId::new(record.status),
            record.length,
        )
    }
}

/// Accepts the boolean spellings found in panel exports.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value '{}'",
            other
        ))),
    }
}
