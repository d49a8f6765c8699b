use serde::{Deserialize, Serialize};

use super::{
    dimensions::{
        academic_year_match, content_type_match, course_overlap, difficulty_level_match,
        environment_match, goal_alignment, learning_style_match, personality_match,
        time_compatibility,
    },
    reasons::compatibility_reasons,
    shared::distinct_shared_items,
    weights::{Dimension, MatchingWeights},
};
use crate::preferences::UserPreferences;

/// Raw sub-scores in `0.0..=1.0`, one per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScores {
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

impl DimensionScores {
    pub fn compute(user: &UserPreferences, candidate: &UserPreferences) -> Self {
        Self {
            course_overlap: course_overlap(&user.courses, &candidate.courses),
            time_compatibility: time_compatibility(
                &user.study_time_preferences,
                &candidate.study_time_preferences,
            ),
            learning_style_match: learning_style_match(
                &user.learning_styles,
                &candidate.learning_styles,
            ),
            academic_year_match: academic_year_match(
                user.academic_year,
                candidate.academic_year,
            ),
            environment_match: environment_match(
                &user.preferred_study_environments,
                &candidate.preferred_study_environments,
            ),
            personality_match: personality_match(
                (user.introvert_extrovert, candidate.introvert_extrovert),
                (user.focused_collaborative, candidate.focused_collaborative),
            ),
            goal_alignment: goal_alignment(&user.study_goals, &candidate.study_goals),
            content_type_match: content_type_match(
                &user.preferred_content_types,
                &candidate.preferred_content_types,
            ),
            difficulty_level_match: difficulty_level_match(
                &user.comfortable_difficulty_levels,
                &candidate.comfortable_difficulty_levels,
            ),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
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

    pub fn weighted_total(&self, weights: &MatchingWeights) -> f64 {
        Dimension::ALL
            .iter()
            .map(|d| self.get(*d) * weights.weight(*d))
            .sum()
    }
}

/// Sub-scores as integer percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub course_overlap: u8,
    pub time_compatibility: u8,
    pub learning_style_match: u8,
    pub academic_year_match: u8,
    pub environment_match: u8,
    pub personality_match: u8,
    pub goal_alignment: u8,
    pub content_type_match: u8,
    pub difficulty_level_match: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> u8 {
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
}

impl From<&DimensionScores> for ScoreBreakdown {
    fn from(value: &DimensionScores) -> Self {
        Self {
            course_overlap: to_percent(value.course_overlap),
            time_compatibility: to_percent(value.time_compatibility),
            learning_style_match: to_percent(value.learning_style_match),
            academic_year_match: to_percent(value.academic_year_match),
            environment_match: to_percent(value.environment_match),
            personality_match: to_percent(value.personality_match),
            goal_alignment: to_percent(value.goal_alignment),
            content_type_match: to_percent(value.content_type_match),
            difficulty_level_match: to_percent(value.difficulty_level_match),
        }
    }
}

/// Compatibility of one candidate with the requesting student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub user_id: String,
    /// Weighted total, 0-100.
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    /// Courses both students take, in the requesting student's order.
    pub shared_courses: Vec<String>,
    pub compatibility_reasons: Vec<String>,
}

/// Round a `0.0..=1.0` score to an integer percentage.
pub fn to_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Score a single candidate against the requesting student's preferences.
pub fn calculate_match_score(
    user: &UserPreferences,
    candidate: &UserPreferences,
    weights: &MatchingWeights,
    candidate_id: &str,
) -> MatchScore {
    let scores = DimensionScores::compute(user, candidate);
    let total = scores.weighted_total(weights);
    let shared_courses = distinct_shared_items(&user.courses, &candidate.courses);
    let compatibility_reasons = compatibility_reasons(&scores, &shared_courses, user, candidate);

    MatchScore {
        user_id: candidate_id.to_string(),
        score: to_percent(total),
        breakdown: ScoreBreakdown::from(&scores),
        shared_courses,
        compatibility_reasons,
    }
}
