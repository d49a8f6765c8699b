use super::{scoring::DimensionScores, shared::shared_items};
use crate::preferences::{goal_label, UserPreferences};

/// A list dimension contributes a reason only above this sub-score.
pub const REASON_THRESHOLD: f64 = 0.6;

/// Short explanations of why two students fit, at most one per dimension.
///
/// Order: courses, content type, difficulty, study time, academic year,
/// learning style, environment, goals. Each reason names the first shared
/// value in the requesting student's order.
pub fn compatibility_reasons(
    scores: &DimensionScores,
    shared_courses: &[String],
    user: &UserPreferences,
    candidate: &UserPreferences,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match shared_courses {
        [] => {}
        [only] => reasons.push(format!("Taking {only} together")),
        [first, ..] => reasons.push(format!(
            "{} shared courses, including {first}",
            shared_courses.len()
        )),
    }

    if scores.content_type_match > REASON_THRESHOLD {
        if let Some(content) =
            first_shared(&user.preferred_content_types, &candidate.preferred_content_types)
        {
            reasons.push(format!("Both interested in {}", content.label()));
        }
    }

    if scores.difficulty_level_match > REASON_THRESHOLD {
        if let Some(level) = first_shared(
            &user.comfortable_difficulty_levels,
            &candidate.comfortable_difficulty_levels,
        ) {
            reasons.push(format!("Similar skill level: {}", level.label()));
        }
    }

    if scores.time_compatibility > REASON_THRESHOLD {
        if let Some(time) =
            first_shared(&user.study_time_preferences, &candidate.study_time_preferences)
        {
            reasons.push(format!("Both prefer {} study sessions", time.label()));
        }
    }

    if scores.academic_year_match == 1.0 {
        if let Some(year) = user.academic_year {
            reasons.push(format!("Both are {}s", year.label()));
        }
    }

    if scores.learning_style_match > REASON_THRESHOLD {
        if let Some(style) = first_shared(&user.learning_styles, &candidate.learning_styles) {
            reasons.push(format!("Compatible learning style: {}", style.label()));
        }
    }

    if scores.environment_match > REASON_THRESHOLD {
        if let Some(env) = first_shared(
            &user.preferred_study_environments,
            &candidate.preferred_study_environments,
        ) {
            reasons.push(format!("Both like studying in {}s", env.label()));
        }
    }

    if scores.goal_alignment > REASON_THRESHOLD {
        if let Some(goal) = first_shared(&user.study_goals, &candidate.study_goals) {
            reasons.push(format!("Similar goals: {}", goal_label(&goal)));
        }
    }

    reasons
}

fn first_shared<T: Eq + std::hash::Hash + Clone>(first: &[T], second: &[T]) -> Option<T> {
    shared_items(first, second).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{
        AcademicYear, DifficultyLevel, LearningStyle, SessionContentType, StudyEnvironment,
        StudyTimePreference,
    };

    fn reasons_for(user: &UserPreferences, candidate: &UserPreferences) -> Vec<String> {
        let scores = DimensionScores::compute(user, candidate);
        let shared = crate::matching::shared::distinct_shared_items(&user.courses, &candidate.courses);
        compatibility_reasons(&scores, &shared, user, candidate)
    }

    fn everything() -> UserPreferences {
        UserPreferences {
            academic_year: Some(AcademicYear::Senior),
            courses: vec!["CS61A".into()],
            study_time_preferences: vec![StudyTimePreference::LateNight],
            preferred_study_environments: vec![StudyEnvironment::Cafe],
            learning_styles: vec![LearningStyle::ReadingWriting],
            preferred_content_types: vec![SessionContentType::FinalReview],
            comfortable_difficulty_levels: vec![DifficultyLevel::MockExam],
            study_goals: vec!["exam-prep".into()],
            ..UserPreferences::default()
        }
    }

    #[test]
    fn reasons_follow_fixed_priority() {
        let user = everything();
        let reasons = reasons_for(&user, &user);

        assert_eq!(
            reasons,
            vec![
                "Taking CS61A together",
                "Both interested in final review",
                "Similar skill level: Mock Exam",
                "Both prefer late night study sessions",
                "Both are Seniors",
                "Compatible learning style: reading/writing",
                "Both like studying in cafes",
                "Similar goals: exam prep",
            ]
        );
    }

    #[test]
    fn several_shared_courses_name_the_first() {
        let user = UserPreferences {
            courses: vec!["CS70".into(), "CS61A".into(), "EECS16A".into()],
            ..UserPreferences::default()
        };
        let candidate = UserPreferences {
            courses: vec!["CS61A".into(), "CS70".into()],
            ..UserPreferences::default()
        };

        let reasons = reasons_for(&user, &candidate);
        assert_eq!(reasons, vec!["2 shared courses, including CS70".to_string()]);
    }

    #[test]
    fn weak_dimensions_add_no_reason() {
        let user = UserPreferences {
            study_time_preferences: vec![
                StudyTimePreference::Morning,
                StudyTimePreference::Evening,
            ],
            learning_styles: vec![LearningStyle::Visual],
            ..UserPreferences::default()
        };
        let candidate = UserPreferences {
            study_time_preferences: vec![
                StudyTimePreference::Evening,
                StudyTimePreference::Afternoon,
            ],
            learning_styles: vec![LearningStyle::Visual, LearningStyle::Auditory],
            ..UserPreferences::default()
        };

        // time 0.5 and learning style 0.5 both sit below the threshold
        assert!(reasons_for(&user, &candidate).is_empty());
    }

    #[test]
    fn neutral_year_gives_no_reason() {
        let user = UserPreferences {
            academic_year: Some(AcademicYear::Junior),
            ..UserPreferences::default()
        };
        let candidate = UserPreferences {
            academic_year: Some(AcademicYear::Senior),
            ..UserPreferences::default()
        };
        assert!(reasons_for(&user, &candidate).is_empty());
        assert!(reasons_for(&user, &UserPreferences::default()).is_empty());
    }

    #[test]
    fn adjacent_difficulty_without_overlap_gives_no_reason() {
        let user = UserPreferences {
            comfortable_difficulty_levels: vec![DifficultyLevel::Beginner, DifficultyLevel::Advanced],
            ..UserPreferences::default()
        };
        let candidate = UserPreferences {
            comfortable_difficulty_levels: vec![DifficultyLevel::Medium],
            ..UserPreferences::default()
        };
        assert!(reasons_for(&user, &candidate).is_empty());
    }
}
