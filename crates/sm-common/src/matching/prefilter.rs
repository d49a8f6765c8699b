use serde::{Deserialize, Serialize};
use tracing::debug;

use super::shared::has_any_shared;
use crate::preferences::{
    AcademicYear, Candidate, DifficultyLevel, SessionContentType, StudyTimePreference,
    UserPreferences,
};

/// Hard constraints applied before scoring. Every set constraint must hold.
///
/// Empty lists and `None` impose nothing. List constraints pass when the
/// candidate shares at least one value with the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilters {
    pub courses: Vec<String>,
    pub academic_year: Option<AcademicYear>,
    pub study_times: Vec<StudyTimePreference>,
    pub content_types: Vec<SessionContentType>,
    pub difficulty_levels: Vec<DifficultyLevel>,
    pub min_group_size: Option<u8>,
    pub max_group_size: Option<u8>,
}

impl CandidateFilters {
    pub fn is_unconstrained(&self) -> bool {
        self == &CandidateFilters::default()
    }

    pub fn matches(&self, prefs: &UserPreferences) -> bool {
        if !self.courses.is_empty() && !has_any_shared(&self.courses, &prefs.courses) {
            return false;
        }

        if let Some(year) = self.academic_year {
            if prefs.academic_year != Some(year) {
                return false;
            }
        }

        if !self.study_times.is_empty()
            && !has_any_shared(&self.study_times, &prefs.study_time_preferences)
        {
            return false;
        }

        if !self.content_types.is_empty()
            && !has_any_shared(&self.content_types, &prefs.preferred_content_types)
        {
            return false;
        }

        if !self.difficulty_levels.is_empty()
            && !has_any_shared(&self.difficulty_levels, &prefs.comfortable_difficulty_levels)
        {
            return false;
        }

        // an undeclared group size never excludes
        if let Some(size) = prefs.preferred_group_size {
            if self.min_group_size.is_some_and(|min| size < min) {
                return false;
            }
            if self.max_group_size.is_some_and(|max| size > max) {
                return false;
            }
        }

        true
    }
}

/// Keep the candidates that satisfy every constraint in `filters`, in input order.
pub fn filter_candidates_by_preferences(
    candidates: &[Candidate],
    filters: &CandidateFilters,
) -> Vec<Candidate> {
    if filters.is_unconstrained() {
        return candidates.to_vec();
    }

    let retained: Vec<_> = candidates
        .iter()
        .filter(|candidate| filters.matches(&candidate.preferences))
        .cloned()
        .collect();

    debug!(
        candidates = candidates.len(),
        retained = retained.len(),
        "applied candidate pre-filter"
    );

    retained
}
