//! Snapshot fixtures shared by the query handler tests.

use std::sync::Arc;

use crate::adapters::reference::InMemoryReferenceStore;
use crate::application::StatusResolver;
use crate::domain::foundation::{MemberId, StatusId, SurveyId};
use crate::domain::reference::{Member, Participation, ReferenceData, Status, Survey};

pub const NOT_ASKED: StatusId = StatusId::new(1);
pub const REJECTED: StatusId = StatusId::new(2);
pub const FILTERED: StatusId = StatusId::new(3);
pub const COMPLETED: StatusId = StatusId::new(4);

/// Builder for small reference snapshots.
pub struct Fixture {
    members: Vec<Member>,
    surveys: Vec<Survey>,
    statuses: Vec<Status>,
    participations: Vec<Participation>,
}

impl Fixture {
    /// Empty datasets with the four standard statuses.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            surveys: Vec::new(),
            statuses: vec![
                Status::new(NOT_ASKED, "Not asked"),
                Status::new(REJECTED, "Rejected"),
                Status::new(FILTERED, "Filtered"),
                Status::new(COMPLETED, "Completed"),
            ],
            participations: Vec::new(),
        }
    }

    pub fn without_statuses(mut self) -> Self {
        self.statuses.clear();
        self
    }

    pub fn without_status(mut self, id: StatusId) -> Self {
        self.statuses.retain(|status| status.id != id);
        self
    }

    pub fn member(mut self, id: i64, active: bool) -> Self {
        self.members.push(Member::new(
            MemberId::new(id),
            format!("Member {}", id),
            format!("member{}@example.com", id),
            active,
        ));
        self
    }

    pub fn survey(mut self, id: i64, completion_points: i32, filtered_points: i32) -> Self {
        self.surveys.push(Survey::new(
            SurveyId::new(id),
            format!("Survey {}", id),
            100,
            completion_points,
            filtered_points,
        ));
        self
    }

    pub fn participation(mut self, member: i64, survey: i64, status: StatusId, length: Option<i32>) -> Self {
        self.participations.push(Participation::new(
            MemberId::new(member),
            SurveyId::new(survey),
            status,
            length,
        ));
        self
    }

    pub fn build(self) -> Arc<InMemoryReferenceStore> {
        let data = ReferenceData::new(self.members, self.surveys, self.statuses, self.participations)
            .expect("fixture data should be consistent");
        Arc::new(InMemoryReferenceStore::new(data))
    }
}

pub fn resolver(store: &InMemoryReferenceStore) -> StatusResolver {
    StatusResolver::new(store)
}
