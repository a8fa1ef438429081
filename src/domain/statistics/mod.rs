//! Statistics - pure aggregation over participation rows.

mod survey_statistic;

pub use survey_statistic::{OutcomeStatuses, ParticipationTally, SurveyStatistic};
