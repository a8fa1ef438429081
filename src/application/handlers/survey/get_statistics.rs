//! GetStatisticsHandler - Query handler for per-survey participation statistics.
//!
//! Produces one entry for every survey that appears in the participation
//! dataset, ordered by survey id. Surveys without participations get no
//! entry. Every survey referenced by a participation must exist in the
//! survey dataset; otherwise the whole query fails with
//! `DanglingSurveyReference`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::StatusResolver;
use crate::domain::foundation::{StatusKind, SurveyId};
use crate::domain::statistics::{OutcomeStatuses, ParticipationTally, SurveyStatistic};
use crate::ports::{ParticipationReader, QueryError, SurveyReader};

/// Query for statistics across all surveys.
#[derive(Debug, Clone, Default)]
pub struct GetStatisticsQuery;

pub type GetStatisticsResult = Vec<SurveyStatistic>;

/// Handler computing survey statistics.
pub struct GetStatisticsHandler {
    surveys: Arc<dyn SurveyReader>,
    participations: Arc<dyn ParticipationReader>,
    statuses: StatusResolver,
}

impl GetStatisticsHandler {
    pub fn new(
        surveys: Arc<dyn SurveyReader>,
        participations: Arc<dyn ParticipationReader>,
        statuses: StatusResolver,
    ) -> Self {
        Self {
            surveys,
            participations,
            statuses,
        }
    }

    pub fn handle(&self, _query: GetStatisticsQuery) -> Result<GetStatisticsResult, QueryError> {
        let outcomes = OutcomeStatuses {
            completed: self.statuses.resolve(StatusKind::Completed)?,
            filtered: self.statuses.resolve(StatusKind::Filtered)?,
            rejected: self.statuses.resolve(StatusKind::Rejected)?,
        };

        let mut tallies: BTreeMap<SurveyId, ParticipationTally> = BTreeMap::new();
        for participation in self.participations.all_participations() {
            tallies
                .entry(participation.survey_id)
                .or_insert_with(|| ParticipationTally::new(outcomes))
                .record(&participation);
        }

        let mut statistics = Vec::with_capacity(tallies.len());
        for (survey_id, tally) in tallies {
            let name = self.surveys.name_for(survey_id).ok_or_else(|| {
                tracing::error!(%survey_id, "Participations reference a survey missing from the survey dataset");
                QueryError::DanglingSurveyReference(survey_id)
            })?;
            statistics.push(tally.into_statistic(survey_id, name));
        }

        tracing::debug!(surveys = statistics.len(), "Computed survey statistics");
        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        resolver, Fixture, COMPLETED, FILTERED, NOT_ASKED, REJECTED,
    };
    use proptest::prelude::*;

    fn handler(fixture: Fixture) -> GetStatisticsHandler {
        let store = fixture.build();
        let statuses = resolver(&store);
        GetStatisticsHandler::new(store.clone(), store, statuses)
    }

    #[test]
    fn counts_outcomes_and_averages_all_lengths() {
        let handler = handler(
            Fixture::new()
                .survey(1, 10, 2)
                .participation(1, 1, COMPLETED, Some(10))
                .participation(2, 1, COMPLETED, Some(20))
                .participation(3, 1, FILTERED, Some(15)),
        );

        let statistics = handler.handle(GetStatisticsQuery).unwrap();

        assert_eq!(statistics.len(), 1);
        let statistic = &statistics[0];
        assert_eq!(statistic.id, SurveyId::new(1));
        assert_eq!(statistic.name, "Survey 1");
        assert_eq!(statistic.completed_count, 2);
        assert_eq!(statistic.filtered_count, 1);
        assert_eq!(statistic.rejected_count, 0);
        assert_eq!(statistic.average_length, 15.0);
    }

    #[test]
    fn empty_participations_give_empty_statistics() {
        let handler = handler(Fixture::new().survey(1, 10, 2).survey(2, 10, 2));

        assert!(handler.handle(GetStatisticsQuery).unwrap().is_empty());
    }

    #[test]
    fn surveys_without_participations_get_no_entry() {
        let handler = handler(
            Fixture::new()
                .survey(1, 10, 2)
                .survey(2, 10, 2)
                .survey(3, 10, 2)
                .participation(1, 3, REJECTED, None)
                .participation(1, 1, NOT_ASKED, None),
        );

        let ids: Vec<i64> = handler
            .handle(GetStatisticsQuery)
            .unwrap()
            .iter()
            .map(|s| s.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn null_lengths_are_excluded_and_all_null_is_zero() {
        let handler = handler(
            Fixture::new()
                .survey(1, 10, 2)
                .survey(2, 10, 2)
                .participation(1, 1, COMPLETED, None)
                .participation(2, 1, REJECTED, Some(6))
                .participation(1, 2, COMPLETED, None)
                .participation(2, 2, FILTERED, None),
        );

        let statistics = handler.handle(GetStatisticsQuery).unwrap();
        assert_eq!(statistics[0].average_length, 6.0);
        assert_eq!(statistics[0].rejected_count, 1);
        assert_eq!(statistics[1].average_length, 0.0);
    }

    #[test]
    fn participation_on_unknown_survey_fails_the_query() {
        let handler = handler(
            Fixture::new()
                .survey(1, 10, 2)
                .participation(1, 1, COMPLETED, Some(3))
                .participation(1, 8, COMPLETED, Some(3)),
        );

        let err = handler.handle(GetStatisticsQuery).unwrap_err();
        assert_eq!(err, QueryError::DanglingSurveyReference(SurveyId::new(8)));
    }

    #[test]
    fn missing_rejected_status_is_reported() {
        let handler = handler(Fixture::new().without_status(REJECTED).survey(1, 10, 2));

        let err = handler.handle(GetStatisticsQuery).unwrap_err();
        assert_eq!(err, QueryError::UnknownStatus("Rejected".to_string()));
    }

    fn status_for(code: u8) -> crate::domain::foundation::StatusId {
        match code % 4 {
            0 => NOT_ASKED,
            1 => REJECTED,
            2 => FILTERED,
            _ => COMPLETED,
        }
    }

    proptest! {
        #[test]
        fn counts_never_exceed_group_size(
            rows in prop::collection::vec((1i64..5, any::<u8>(), prop::option::of(0i32..500)), 0..60),
        ) {
            let mut fixture = Fixture::new()
                .survey(1, 10, 2)
                .survey(2, 10, 2)
                .survey(3, 10, 2)
                .survey(4, 10, 2);
            for (survey, code, length) in &rows {
                fixture = fixture.participation(1, *survey, status_for(*code), *length);
            }
            let statistics = handler(fixture).handle(GetStatisticsQuery).unwrap();

            let mut previous: Option<SurveyId> = None;
            for statistic in &statistics {
                let group: Vec<_> = rows.iter().filter(|(survey, _, _)| *survey == statistic.id.value()).collect();
                prop_assert!(!group.is_empty());
                prop_assert!(
                    statistic.completed_count + statistic.filtered_count + statistic.rejected_count
                        <= group.len() as u64
                );

                let lengths: Vec<i32> = group.iter().filter_map(|(_, _, length)| *length).collect();
                let expected = if lengths.is_empty() {
                    0.0
                } else {
                    lengths.iter().map(|l| f64::from(*l)).sum::<f64>() / lengths.len() as f64
                };
                prop_assert!((statistic.average_length - expected).abs() < 1e-9);

                prop_assert!(previous.map_or(true, |p| p < statistic.id));
                previous = Some(statistic.id);
            }
        }
    }
}
