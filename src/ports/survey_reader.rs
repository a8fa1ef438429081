use crate::domain::foundation::SurveyId;
use crate::domain::reference::Survey;

/// Read-only port over the survey dataset
pub trait SurveyReader: Send + Sync {
    /// Returns true if a survey with this id was loaded
    fn exists_by_id(&self, id: SurveyId) -> bool;

    /// Finds a survey by id
    fn find_by_id(&self, id: SurveyId) -> Option<Survey>;

    /// Points a participation earns on this survey
    ///
    /// Completion points when `is_completed`, filtered points otherwise.
    /// `None` if the survey is unknown.
    fn points_for(&self, id: SurveyId, is_completed: bool) -> Option<i32>;

    /// Display name of the survey, `None` if unknown
    fn name_for(&self, id: SurveyId) -> Option<String>;
}
