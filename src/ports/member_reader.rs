use std::collections::BTreeMap;

use crate::domain::foundation::MemberId;
use crate::domain::reference::Member;

/// Read-only port over the member dataset
pub trait MemberReader: Send + Sync {
    /// Returns true if a member with this id was loaded
    fn exists_by_id(&self, id: MemberId) -> bool;

    /// Finds a member by id
    fn find_by_id(&self, id: MemberId) -> Option<Member>;

    /// Returns an owned copy of every member keyed by id
    ///
    /// Callers may mutate the returned map freely.
    fn all_members(&self) -> BTreeMap<MemberId, Member>;
}
