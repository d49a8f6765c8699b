use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// The nine scored compatibility dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Dimension {
    CourseOverlap,
    TimeCompatibility,
    LearningStyleMatch,
    AcademicYearMatch,
    EnvironmentMatch,
    PersonalityMatch,
    GoalAlignment,
    ContentTypeMatch,
    DifficultyLevelMatch,
}

impl Dimension {
    /// Summation order of the weighted total.
    pub const ALL: [Dimension; 9] = [
        Dimension::CourseOverlap,
        Dimension::TimeCompatibility,
        Dimension::LearningStyleMatch,
        Dimension::AcademicYearMatch,
        Dimension::EnvironmentMatch,
        Dimension::PersonalityMatch,
        Dimension::GoalAlignment,
        Dimension::ContentTypeMatch,
        Dimension::DifficultyLevelMatch,
    ];
}

/// Default weights.
/// Shared courses dominate, followed by being able to meet at all,
/// then what and how hard the students want to study.
pub const DEFAULT_MATCHING_WEIGHTS: MatchingWeights = MatchingWeights {
    course_overlap: 0.30,
    time_compatibility: 0.20,
    content_type_match: 0.15,
    difficulty_level_match: 0.12,
    learning_style_match: 0.10,
    academic_year_match: 0.05,
    environment_match: 0.04,
    personality_match: 0.02,
    goal_alignment: 0.02,
};

/// Weight per dimension. Expected to sum to 1.0; the engine does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingWeights {
    pub course_overlap: f64,
    pub time_compatibility: f64,
    pub learning_style_match: f64,
    pub academic_year_match: f64,
    pub environment_match: f64,
    pub personality_match: f64,
    pub goal_alignment: f64,
    pub content_type_match: f64,
    pub difficulty_level_match: f64,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        DEFAULT_MATCHING_WEIGHTS
    }
}

impl MatchingWeights {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::CourseOverlap => self.course_overlap,
            Dimension::TimeCompatibility => self.time_compatibility,
            Dimension::LearningStyleMatch => self.learning_style_match,
            Dimension::AcademicYearMatch => self.academic_year_match,
            Dimension::EnvironmentMatch => self.environment_match,
            Dimension::PersonalityMatch => self.personality_match,
            Dimension::GoalAlignment => self.goal_alignment,
            Dimension::ContentTypeMatch => self.content_type_match,
            Dimension::DifficultyLevelMatch => self.difficulty_level_match,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.weight(*d)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_MATCHING_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_table_is_exact() {
        let w = MatchingWeights::default();
        assert_eq!(w.course_overlap, 0.30);
        assert_eq!(w.time_compatibility, 0.20);
        assert_eq!(w.content_type_match, 0.15);
        assert_eq!(w.difficulty_level_match, 0.12);
        assert_eq!(w.learning_style_match, 0.10);
        assert_eq!(w.academic_year_match, 0.05);
        assert_eq!(w.environment_match, 0.04);
        assert_eq!(w.personality_match, 0.02);
        assert_eq!(w.goal_alignment, 0.02);
    }

    #[test]
    fn all_lists_every_dimension_once() {
        assert_eq!(Dimension::iter().count(), Dimension::ALL.len());
        for dimension in Dimension::iter() {
            assert_eq!(Dimension::ALL.iter().filter(|d| **d == dimension).count(), 1);
        }
        assert_eq!(Dimension::DifficultyLevelMatch.as_ref(), "difficultyLevelMatch");
    }
}
