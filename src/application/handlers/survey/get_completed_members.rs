//! GetCompletedMembersHandler - Query handler for a survey's completers.

use std::sync::Arc;

use crate::application::StatusResolver;
use crate::domain::foundation::{StatusKind, SurveyId};
use crate::domain::reference::Member;
use crate::ports::{MemberReader, ParticipationReader, QueryError, SurveyReader};

/// Query for the members who completed a survey.
#[derive(Debug, Clone)]
pub struct GetCompletedMembersQuery {
    pub survey_id: SurveyId,
}

/// Members in participation order.
pub type GetCompletedMembersResult = Vec<Member>;

/// Handler for retrieving the members who completed a survey.
pub struct GetCompletedMembersHandler {
    members: Arc<dyn MemberReader>,
    surveys: Arc<dyn SurveyReader>,
    participations: Arc<dyn ParticipationReader>,
    statuses: StatusResolver,
}

impl GetCompletedMembersHandler {
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

    pub fn handle(
        &self,
        query: GetCompletedMembersQuery,
    ) -> Result<GetCompletedMembersResult, QueryError> {
        let survey_id = query.survey_id;
        if !self.surveys.exists_by_id(survey_id) {
            return Err(QueryError::SurveyNotFound(survey_id));
        }

        let completed = self.statuses.resolve(StatusKind::Completed)?;

        let members: Vec<Member> = self
            .participations
            .all_participations()
            .iter()
            .filter(|p| p.survey_id == survey_id && p.status == completed)
            .filter_map(|p| self.members.find_by_id(p.member_id))
            .collect();

        tracing::debug!(%survey_id, count = members.len(), "Resolved completed members");
        Ok(members)
    }
}
