use crate::domain::reference::Participation;

/// Read-only port over the participation dataset
pub trait ParticipationReader: Send + Sync {
    /// Every participation row in source order
    ///
    /// Always a full scan; no filtering is pushed down.
    fn all_participations(&self) -> Vec<Participation>;
}
