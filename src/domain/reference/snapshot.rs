//! ReferenceData - the immutable snapshot every query reads from.
//!
//! Built once from the loaded datasets and shared behind an `Arc`. There
//! are no mutating methods; a new dataset means a new snapshot.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::domain::foundation::{MemberId, StatusId, SurveyId};

use super::{Member, Participation, Status, Survey};

/// Errors raised while assembling a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Duplicate member id: {0}")]
    DuplicateMember(MemberId),

    #[error("Duplicate survey id: {0}")]
    DuplicateSurvey(SurveyId),

    #[error("Duplicate status id: {0}")]
    DuplicateStatusId(StatusId),

    #[error("Duplicate status name: {0}")]
    DuplicateStatusName(String),
}

/// Members, surveys, statuses and participations as one consistent value.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    members: BTreeMap<MemberId, Member>,
    surveys: BTreeMap<SurveyId, Survey>,
    statuses: Vec<Status>,
    status_ids_by_name: HashMap<String, StatusId>,
    participations: Vec<Participation>,
}

impl ReferenceData {
    /// Assembles a snapshot, rejecting duplicate keys.
    ///
    /// Participations keep their source order; they are not checked
    /// against the other collections.
    pub fn new(
        members: Vec<Member>,
        surveys: Vec<Survey>,
        statuses: Vec<Status>,
        participations: Vec<Participation>,
    ) -> Result<Self, SnapshotError> {
        let mut member_map = BTreeMap::new();
        for member in members {
            let id = member.id;
            if member_map.insert(id, member).is_some() {
                return Err(SnapshotError::DuplicateMember(id));
            }
        }

        let mut survey_map = BTreeMap::new();
        for survey in surveys {
            let id = survey.id;
            if survey_map.insert(id, survey).is_some() {
                return Err(SnapshotError::DuplicateSurvey(id));
            }
        }

        let mut status_ids_by_name = HashMap::with_capacity(statuses.len());
        let mut seen_ids = Vec::with_capacity(statuses.len());
        for status in &statuses {
            if seen_ids.contains(&status.id) {
                return Err(SnapshotError::DuplicateStatusId(status.id));
            }
            seen_ids.push(status.id);
            if status_ids_by_name
                .insert(status.name.clone(), status.id)
                .is_some()
            {
                return Err(SnapshotError::DuplicateStatusName(status.name.clone()));
            }
        }

        Ok(Self {
            members: member_map,
            surveys: survey_map,
            statuses,
            status_ids_by_name,
            participations,
        })
    }

    pub fn members(&self) -> &BTreeMap<MemberId, Member> {
        &self.members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn surveys(&self) -> &BTreeMap<SurveyId, Survey> {
        &self.surveys
    }

    pub fn survey(&self, id: SurveyId) -> Option<&Survey> {
        self.surveys.get(&id)
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Looks up a status identifier by its exact name.
    pub fn status_id(&self, name: &str) -> Option<StatusId> {
        self.status_ids_by_name.get(name).copied()
    }

    /// Participations in source order.
    pub fn participations(&self) -> &[Participation] {
        &self.participations
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn survey_count(&self) -> usize {
        self.surveys.len()
    }

    pub fn status_count(&self) -> usize {
        self.statuses.len()
    }

    pub fn participation_count(&self) -> usize {
        self.participations.len()
    }
}
