pub mod enums;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use enums::{
    goal_label, AcademicYear, CommitmentLevel, DifficultyLevel, LearningStyle,
    SessionContentType, SessionFrequency, StudyEnvironment, StudyTimePreference, Weekday,
    ACADEMIC_YEAR_ORDER, DIFFICULTY_LEVEL_ORDER,
};
pub use validate::InvalidPreferencesError;

/// Inclusive bounds for `preferred_group_size`.
pub const GROUP_SIZE_RANGE: (u8, u8) = (2, 10);
/// Inclusive bounds for the 1-5 personality scales.
pub const PERSONALITY_SCALE_RANGE: (u8, u8) = (1, 5);

/// Declared study-partner preferences of one student.
///
/// Missing lists deserialize as empty and missing scalars as `None`; the
/// scorers treat both as "no signal" rather than as a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    // academic
    pub academic_year: Option<AcademicYear>,
    pub major: Option<String>,
    pub courses: Vec<String>,

    // study habits
    pub study_time_preferences: Vec<StudyTimePreference>,
    pub preferred_study_environments: Vec<StudyEnvironment>,
    pub learning_styles: Vec<LearningStyle>,

    // sessions
    pub session_frequency: Option<SessionFrequency>,
    pub commitment_level: Option<CommitmentLevel>,
    pub preferred_group_size: Option<u8>,
    pub preferred_content_types: Vec<SessionContentType>,
    pub comfortable_difficulty_levels: Vec<DifficultyLevel>,

    // personality (1 = introvert / focused, 5 = extrovert / collaborative)
    pub introvert_extrovert: Option<u8>,
    pub focused_collaborative: Option<u8>,

    // availability
    pub available_days: Vec<Weekday>,
    pub time_zone: Option<String>,

    pub study_goals: Vec<String>,
    pub interests: Vec<String>,
}

/// A candidate student: opaque id carried through to the match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub user_id: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl Candidate {
    pub fn new(user_id: impl Into<String>, preferences: UserPreferences) -> Self {
        Self {
            user_id: user_id.into(),
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_defaults() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"courses": ["CS61A"], "academicYear": "junior"}"#).unwrap();

        assert_eq!(prefs.courses, vec!["CS61A".to_string()]);
        assert_eq!(prefs.academic_year, Some(AcademicYear::Junior));
        assert!(prefs.study_time_preferences.is_empty());
        assert!(prefs.comfortable_difficulty_levels.is_empty());
        assert_eq!(prefs.introvert_extrovert, None);
    }

    #[test]
    fn candidate_uses_camel_case_on_the_wire() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"userId": "u-1", "preferences": {"studyTimePreferences": ["late-night"]}}"#,
        )
        .unwrap();

        assert_eq!(candidate.user_id, "u-1");
        assert_eq!(
            candidate.preferences.study_time_preferences,
            vec![StudyTimePreference::LateNight]
        );

        let json = serde_json::to_value(&candidate).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json["preferences"].get("comfortableDifficultyLevels").is_some());
    }
}
