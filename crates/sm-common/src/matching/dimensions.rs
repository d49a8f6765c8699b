//! Per-dimension sub-scorers. Every function returns a value in `0.0..=1.0`.
//!
//! Each scorer applies its own "no signal" rule at the top: an empty list or
//! missing value yields [`NEUTRAL_SCORE`], except course overlap which yields 0.

use super::shared::{distinct_shared_items, shared_items, union_len};
use crate::preferences::{
    AcademicYear, DifficultyLevel, LearningStyle, SessionContentType, StudyEnvironment,
    StudyTimePreference,
};

pub const NEUTRAL_SCORE: f64 = 0.5;

const COURSE_BONUS_PER_SHARED: f64 = 0.15;
const COURSE_BONUS_CAP: f64 = 0.30;

/// Shared count over the smaller declared list, capped at 1.0.
fn overlap_over_smaller(shared: usize, first_len: usize, second_len: usize) -> f64 {
    (shared as f64 / first_len.min(second_len) as f64).min(1.0)
}

/// Jaccard similarity of the course sets plus 0.15 per shared course (max 0.30).
pub fn course_overlap(first: &[String], second: &[String]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }

    let shared = distinct_shared_items(first, second).len() as f64;
    let jaccard = shared / union_len(first, second) as f64;
    let bonus = (shared * COURSE_BONUS_PER_SHARED).min(COURSE_BONUS_CAP);

    (jaccard + bonus).min(1.0)
}

pub fn time_compatibility(first: &[StudyTimePreference], second: &[StudyTimePreference]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    overlap_over_smaller(shared, first.len(), second.len())
}

/// Judged against the larger declared list, unlike the other list dimensions.
pub fn learning_style_match(first: &[LearningStyle], second: &[LearningStyle]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    shared as f64 / first.len().max(second.len()) as f64
}

pub fn academic_year_match(first: Option<AcademicYear>, second: Option<AcademicYear>) -> f64 {
    let (Some(first), Some(second)) = (first, second) else {
        return NEUTRAL_SCORE;
    };

    if first == second {
        return 1.0;
    }

    let (Some(a), Some(b)) = (first.ordinal(), second.ordinal()) else {
        return NEUTRAL_SCORE;
    };

    match a.abs_diff(b) {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        _ => 0.4,
    }
}

pub fn environment_match(first: &[StudyEnvironment], second: &[StudyEnvironment]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    overlap_over_smaller(shared, first.len(), second.len())
}

/// Average closeness on the two 1-5 scales. Neutral unless all four values are known.
pub fn personality_match(
    introvert_extrovert: (Option<u8>, Option<u8>),
    focused_collaborative: (Option<u8>, Option<u8>),
) -> f64 {
    let ((Some(ie1), Some(ie2)), (Some(fc1), Some(fc2))) =
        (introvert_extrovert, focused_collaborative)
    else {
        return NEUTRAL_SCORE;
    };

    let axis = |a: u8, b: u8| (1.0 - f64::from(a.abs_diff(b)) / 4.0).clamp(0.0, 1.0);
    (axis(ie1, ie2) + axis(fc1, fc2)) / 2.0
}

pub fn goal_alignment(first: &[String], second: &[String]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    overlap_over_smaller(shared, first.len(), second.len())
}

pub fn content_type_match(first: &[SessionContentType], second: &[SessionContentType]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    overlap_over_smaller(shared, first.len(), second.len())
}

/// Overlapping levels score like the other list dimensions. Without overlap the
/// gap between the two level ranges decides: 0 -> 0.6, 1 -> 0.4, wider -> 0.2.
pub fn difficulty_level_match(first: &[DifficultyLevel], second: &[DifficultyLevel]) -> f64 {
    if first.is_empty() || second.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = shared_items(first, second).len();
    if shared > 0 {
        return overlap_over_smaller(shared, first.len(), second.len());
    }

    let (min1, max1) = ordinal_span(first);
    let (min2, max2) = ordinal_span(second);
    let distance = min1.max(min2).saturating_sub(max1.min(max2));

    match distance {
        0 => 0.6,
        1 => 0.4,
        _ => 0.2,
    }
}

fn ordinal_span(levels: &[DifficultyLevel]) -> (usize, usize) {
    levels
        .iter()
        .map(|level| level.ordinal())
        .fold((usize::MAX, 0), |(lo, hi), idx| (lo.min(idx), hi.max(idx)))
}
