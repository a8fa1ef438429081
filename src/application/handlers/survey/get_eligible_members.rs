//! GetEligibleMembersHandler - Query handler for members a survey can still invite.
//!
//! Eligibility starts from every member and removes anyone with a
//! participation on the survey whose status is not "Not asked". A member
//! with no row at all for the survey stays eligible. Only active members
//! are returned.
//!
//! The survey id is not checked against the survey dataset: an unknown
//! survey has no participations, so every active member is eligible.

use std::sync::Arc;

use crate::application::StatusResolver;
use crate::domain::foundation::{StatusKind, SurveyId};
use crate::domain::reference::Member;
use crate::ports::{MemberReader, ParticipationReader, QueryError};

/// Query for the members eligible for a survey.
#[derive(Debug, Clone)]
pub struct GetEligibleMembersQuery {
    pub survey_id: SurveyId,
}

/// Active eligible members in ascending member id order.
pub type GetEligibleMembersResult = Vec<Member>;

/// Handler for retrieving eligible members.
pub struct GetEligibleMembersHandler {
    members: Arc<dyn MemberReader>,
    participations: Arc<dyn ParticipationReader>,
    statuses: StatusResolver,
}

impl GetEligibleMembersHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        participations: Arc<dyn ParticipationReader>,
        statuses: StatusResolver,
    ) -> Self {
        Self {
            members,
            participations,
            statuses,
        }
    }

    pub fn handle(
        &self,
        query: GetEligibleMembersQuery,
    ) -> Result<GetEligibleMembersResult, QueryError> {
        let survey_id = query.survey_id;
        let not_asked = self.statuses.resolve(StatusKind::NotAsked)?;

        let mut candidates = self.members.all_members();
        for participation in self.participations.all_participations() {
            if participation.survey_id == survey_id && participation.status != not_asked {
                candidates.remove(&participation.member_id);
            }
        }

        let eligible: Vec<Member> = candidates
            .into_values()
            .filter(|member| member.active)
            .collect();

        tracing::debug!(%survey_id, count = eligible.len(), "Resolved eligible members");
        Ok(eligible)
    }
}
