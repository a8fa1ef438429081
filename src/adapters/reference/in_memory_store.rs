//! In-memory reference store.
//!
//! Serves every reader port from one shared [`ReferenceData`] snapshot.
//! Cloning the store clones the `Arc`, never the data.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{MemberId, StatusId, SurveyId};
use crate::domain::reference::{Member, Participation, ReferenceData, Survey};
use crate::ports::{MemberReader, ParticipationReader, QueryError, StatusReader, SurveyReader};

/// Reader adapter over an immutable snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryReferenceStore {
    data: Arc<ReferenceData>,
}

impl InMemoryReferenceStore {
    pub fn new(data: ReferenceData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn from_shared(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    /// The snapshot this store reads from.
    pub fn snapshot(&self) -> &Arc<ReferenceData> {
        &self.data
    }
}

impl MemberReader for InMemoryReferenceStore {
    fn exists_by_id(&self, id: MemberId) -> bool {
        self.data.member(id).is_some()
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        self.data.member(id).cloned()
    }

    fn all_members(&self) -> BTreeMap<MemberId, Member> {
        self.data.members().clone()
    }
}

impl SurveyReader for InMemoryReferenceStore {
    fn exists_by_id(&self, id: SurveyId) -> bool {
        self.data.survey(id).is_some()
    }

    fn find_by_id(&self, id: SurveyId) -> Option<Survey> {
        self.data.survey(id).cloned()
    }

    fn points_for(&self, id: SurveyId, is_completed: bool) -> Option<i32> {
        self.data.survey(id).map(|survey| survey.points(is_completed))
    }

    fn name_for(&self, id: SurveyId) -> Option<String> {
        self.data.survey(id).map(|survey| survey.name.clone())
    }
}

impl ParticipationReader for InMemoryReferenceStore {
    fn all_participations(&self) -> Vec<Participation> {
        self.data.participations().to_vec()
    }
}

impl StatusReader for InMemoryReferenceStore {
    fn id_for_name(&self, name: &str) -> Result<StatusId, QueryError> {
        self.data
            .status_id(name)
            .ok_or_else(|| QueryError::UnknownStatus(name.to_string()))
    }
}
