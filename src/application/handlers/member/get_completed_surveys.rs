//! GetCompletedSurveysHandler - Query handler for a member's completed surveys.
//!
//! Walks the participations in source order and returns the survey of every
//! "Completed" row belonging to the member.

use std::sync::Arc;

use crate::application::StatusResolver;
use crate::domain::foundation::{MemberId, StatusKind};
use crate::domain::reference::Survey;
use crate::ports::{MemberReader, ParticipationReader, QueryError, SurveyReader};

/// Query for the surveys a member has completed.
#[derive(Debug, Clone)]
pub struct GetCompletedSurveysQuery {
    pub member_id: MemberId,
}

/// Surveys in participation order; repeated completions repeat the survey.
pub type GetCompletedSurveysResult = Vec<Survey>;

/// Handler for retrieving a member's completed surveys.
pub struct GetCompletedSurveysHandler {
    members: Arc<dyn MemberReader>,
    surveys: Arc<dyn SurveyReader>,
    participations: Arc<dyn ParticipationReader>,
    statuses: StatusResolver,
}

impl GetCompletedSurveysHandler {
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
        query: GetCompletedSurveysQuery,
    ) -> Result<GetCompletedSurveysResult, QueryError> {
        let member_id = query.member_id;
        if !self.members.exists_by_id(member_id) {
            return Err(QueryError::MemberNotFound(member_id));
        }

        let completed = self.statuses.resolve(StatusKind::Completed)?;

        // Rows pointing at unknown surveys are dropped without error.
        let surveys: Vec<Survey> = self
            .participations
            .all_participations()
            .iter()
            .filter(|p| p.member_id == member_id && p.status == completed)
            .filter_map(|p| self.surveys.find_by_id(p.survey_id))
            .collect();

        tracing::debug!(%member_id, count = surveys.len(), "Resolved completed surveys");
        Ok(surveys)
    }
}
