//! GetPointsHandler - Query handler for a member's total reward points.
//!
//! A "Completed" participation earns the survey's completion points, a
//! "Filtered" one its filtered points. Every other status earns nothing.

use std::sync::Arc;

use crate::application::StatusResolver;
use crate::domain::foundation::{MemberId, StatusKind};
use crate::ports::{MemberReader, ParticipationReader, QueryError, SurveyReader};

/// Query for a member's point total.
#[derive(Debug, Clone)]
pub struct GetPointsQuery {
    pub member_id: MemberId,
}

pub type GetPointsResult = i64;

/// Handler for totalling a member's points.
pub struct GetPointsHandler {
    members: Arc<dyn MemberReader>,
    surveys: Arc<dyn SurveyReader>,
    participations: Arc<dyn ParticipationReader>,
    statuses: StatusResolver,
}

impl GetPointsHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        surveys: Arc<dyn SurveyReader>,
        participations: Arc<dyn ParticipationReader>,
        statuses: StatusResolver,
    ) -> Self {
        Self {
            members,
            surveys,
            participations,
            statuses,
        }
    }

    pub fn handle(&self, query: GetPointsQuery) -> Result<GetPointsResult, QueryError> {
        let member_id = query.member_id;
        if !self.members.exists_by_id(member_id) {
            return Err(QueryError::MemberNotFound(member_id));
        }

        let completed = self.statuses.resolve(StatusKind::Completed)?;
        let filtered = self.statuses.resolve(StatusKind::Filtered)?;

        let mut total: i64 = 0;
        for participation in self.participations.all_participations() {
            if participation.member_id != member_id {
                continue;
            }
            if participation.status != completed && participation.status != filtered {
                continue;
            }

            let is_completed = participation.status == completed;
            match self.surveys.points_for(participation.survey_id, is_completed) {
                Some(points) => total += i64::from(points),
                None => tracing::warn!(
                    %member_id,
                    survey_id = %participation.survey_id,
                    "Skipping points for participation: {}",
                    QueryError::SurveyNotFound(participation.survey_id)
                ),
            }
        }

        tracing::debug!(%member_id, total, "Computed member points");
        Ok(total)
    }
}
