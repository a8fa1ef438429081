//! Survey statistics - per-survey outcome counts and average length.

use serde::Serialize;

use crate::domain::foundation::{StatusId, SurveyId};
use crate::domain::reference::Participation;

/// Computed summary of one survey's participations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStatistic {
    pub id: SurveyId,
    pub name: String,
    pub completed_count: u64,
    pub filtered_count: u64,
    pub rejected_count: u64,
    /// Mean of the recorded lengths; 0.0 when none were recorded.
    pub average_length: f64,
}

/// Status identifiers that statistics are broken down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeStatuses {
    pub completed: StatusId,
    pub filtered: StatusId,
    pub rejected: StatusId,
}

/// Running totals for one survey's participations.
///
/// Rows with any other status only contribute to the average length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipationTally {
    statuses: OutcomeStatuses,
    completed: u64,
    filtered: u64,
    rejected: u64,
    length_sum: i64,
    length_count: u64,
}

impl ParticipationTally {
    pub fn new(statuses: OutcomeStatuses) -> Self {
        Self {
            statuses,
            completed: 0,
            filtered: 0,
            rejected: 0,
            length_sum: 0,
            length_count: 0,
        }
    }

    /// Adds one participation row.
    pub fn record(&mut self, participation: &Participation) {
        let status = participation.status;
        if status == self.statuses.completed {
            self.completed += 1;
        } else if status == self.statuses.filtered {
            self.filtered += 1;
        } else if status == self.statuses.rejected {
            self.rejected += 1;
        }

        if let Some(length) = participation.length {
            self.length_sum += i64::from(length);
            self.length_count += 1;
        }
    }

    /// Arithmetic mean of the non-null lengths seen so far.
    pub fn average_length(&self) -> f64 {
        if self.length_count == 0 {
            return 0.0;
        }
        self.length_sum as f64 / self.length_count as f64
    }

    /// Finishes the tally into a statistic for the named survey.
    pub fn into_statistic(self, id: SurveyId, name: impl Into<String>) -> SurveyStatistic {
        SurveyStatistic {
            id,
            name: name.into(),
            completed_count: self.completed,
            filtered_count: self.filtered,
            rejected_count: self.rejected,
            average_length: self.average_length(),
        }
    }
}
