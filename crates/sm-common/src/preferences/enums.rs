use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Academic standing of a student. `Other` has no place in [`ACADEMIC_YEAR_ORDER`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AcademicYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Masters,
    Phd,
    Other,
}

/// Ordinal table used for adjacency scoring of academic years.
pub const ACADEMIC_YEAR_ORDER: [AcademicYear; 6] = [
    AcademicYear::Freshman,
    AcademicYear::Sophomore,
    AcademicYear::Junior,
    AcademicYear::Senior,
    AcademicYear::Masters,
    AcademicYear::Phd,
];

impl AcademicYear {
    /// Position in [`ACADEMIC_YEAR_ORDER`]; `None` for years outside the table.
    pub fn ordinal(self) -> Option<usize> {
        ACADEMIC_YEAR_ORDER.iter().position(|year| *year == self)
    }

    /// "freshman" -> "Freshman"
    pub fn label(self) -> String {
        let raw = self.as_ref();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StudyTimePreference {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl StudyTimePreference {
    pub fn label(self) -> String {
        self.as_ref().replacen('-', " ", 1)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StudyEnvironment {
    Library,
    Cafe,
    Dorm,
    Outdoor,
    Quiet,
    Collaborative,
}

impl StudyEnvironment {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
}

impl LearningStyle {
    /// "reading-writing" -> "reading/writing"
    pub fn label(self) -> String {
        self.as_ref().replacen('-', "/", 1)
    }
}

/// Kind of study session a student wants to attend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionContentType {
    TextbookReview,
    MidtermReview,
    FinalReview,
    ReviewOfWeek,
    Homework,
    Projects,
    Labs,
}

impl SessionContentType {
    pub fn label(self) -> &'static str {
        match self {
            SessionContentType::TextbookReview => "textbook review",
            SessionContentType::MidtermReview => "midterm review",
            SessionContentType::FinalReview => "final review",
            SessionContentType::ReviewOfWeek => "review of the week",
            SessionContentType::Homework => "homework",
            SessionContentType::Projects => "projects",
            SessionContentType::Labs => "labs",
        }
    }
}

/// Session difficulty. Declaration order is the ordinal order in [`DIFFICULTY_LEVEL_ORDER`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DifficultyLevel {
    Beginner,
    Medium,
    Advanced,
    MockExam,
}

/// Ordinal table used when two students' comfortable levels do not overlap.
pub const DIFFICULTY_LEVEL_ORDER: [DifficultyLevel; 4] = [
    DifficultyLevel::Beginner,
    DifficultyLevel::Medium,
    DifficultyLevel::Advanced,
    DifficultyLevel::MockExam,
];

impl DifficultyLevel {
    pub fn ordinal(self) -> usize {
        match self {
            DifficultyLevel::Beginner => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Advanced => 2,
            DifficultyLevel::MockExam => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Advanced => "Advanced",
            DifficultyLevel::MockExam => "Mock Exam",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionFrequency {
    Daily,
    SeveralPerWeek,
    Weekly,
    Biweekly,
    Flexible,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CommitmentLevel {
    Casual,
    Moderate,
    Serious,
    Intensive,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Free-text goals use the same hyphen convention as the enum values ("exam-prep").
pub fn goal_label(goal: &str) -> String {
    goal.replacen('-', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn academic_year_order_is_pinned() {
        let ordinals: Vec<_> = AcademicYear::iter().map(AcademicYear::ordinal).collect();
        assert_eq!(
            ordinals,
            vec![Some(0), Some(1), Some(2), Some(3), Some(4), Some(5), None]
        );
    }

    #[test]
    fn difficulty_order_matches_table() {
        for (idx, level) in DIFFICULTY_LEVEL_ORDER.iter().enumerate() {
            assert_eq!(level.ordinal(), idx);
        }
        assert_eq!(DifficultyLevel::iter().count(), DIFFICULTY_LEVEL_ORDER.len());
    }

    #[test]
    fn wire_names_are_kebab_case() {
        assert_eq!(StudyTimePreference::EarlyMorning.as_ref(), "early-morning");
        assert_eq!(LearningStyle::ReadingWriting.as_ref(), "reading-writing");
        assert_eq!(SessionContentType::ReviewOfWeek.as_ref(), "review-of-week");
        assert_eq!(DifficultyLevel::MockExam.as_ref(), "mock-exam");
        assert_eq!(SessionFrequency::SeveralPerWeek.as_ref(), "several-per-week");
        assert_eq!(
            DifficultyLevel::from_str("mock-exam").unwrap(),
            DifficultyLevel::MockExam
        );
        assert_eq!(
            serde_json::to_string(&StudyTimePreference::LateNight).unwrap(),
            "\"late-night\""
        );
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(StudyTimePreference::EarlyMorning.label(), "early morning");
        assert_eq!(AcademicYear::Phd.label(), "Phd");
        assert_eq!(AcademicYear::Sophomore.label(), "Sophomore");
        assert_eq!(LearningStyle::ReadingWriting.label(), "reading/writing");
        assert_eq!(StudyEnvironment::Cafe.label(), "cafe");
        assert_eq!(SessionContentType::ReviewOfWeek.label(), "review of the week");
        assert_eq!(DifficultyLevel::MockExam.label(), "Mock Exam");
        assert_eq!(goal_label("exam-prep"), "exam prep");
    }
}
