use std::str::FromStr;

use serde_json::{Map, Value};

use super::{UserPreferences, GROUP_SIZE_RANGE, PERSONALITY_SCALE_RANGE};

/// A preference document that cannot be turned into a [`UserPreferences`].
///
/// Raised before any scoring happens; never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPreferencesError {
    #[error("preference document must be a JSON object")]
    NotAnObject,
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{field}` has unknown value `{value}`")]
    UnknownVariant { field: &'static str, value: String },
    #[error("field `{field}` = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl UserPreferences {
    /// Parse an untyped preference document with field-level type checks.
    ///
    /// `null` is accepted for every field and means "not declared".
    pub fn from_json(value: &Value) -> Result<Self, InvalidPreferencesError> {
        let object = value.as_object().ok_or(InvalidPreferencesError::NotAnObject)?;

        let prefs = UserPreferences {
            academic_year: scalar_field(object, "academicYear")?,
            major: scalar_field(object, "major")?,
            courses: list_field(object, "courses")?,
            study_time_preferences: list_field(object, "studyTimePreferences")?,
            preferred_study_environments: list_field(object, "preferredStudyEnvironments")?,
            learning_styles: list_field(object, "learningStyles")?,
            session_frequency: scalar_field(object, "sessionFrequency")?,
            commitment_level: scalar_field(object, "commitmentLevel")?,
            preferred_group_size: integer_field(object, "preferredGroupSize", GROUP_SIZE_RANGE)?,
            preferred_content_types: list_field(object, "preferredContentTypes")?,
            comfortable_difficulty_levels: list_field(object, "comfortableDifficultyLevels")?,
            introvert_extrovert: integer_field(
                object,
                "introvertExtrovert",
                PERSONALITY_SCALE_RANGE,
            )?,
            focused_collaborative: integer_field(
                object,
                "focusedCollaborative",
                PERSONALITY_SCALE_RANGE,
            )?,
            available_days: list_field(object, "availableDays")?,
            time_zone: scalar_field(object, "timeZone")?,
            study_goals: list_field(object, "studyGoals")?,
            interests: list_field(object, "interests")?,
        };

        prefs.validate()?;
        Ok(prefs)
    }

    /// Range checks for the numeric fields of an already typed record.
    pub fn validate(&self) -> Result<(), InvalidPreferencesError> {
        check_range("preferredGroupSize", self.preferred_group_size, GROUP_SIZE_RANGE)?;
        check_range(
            "introvertExtrovert",
            self.introvert_extrovert,
            PERSONALITY_SCALE_RANGE,
        )?;
        check_range(
            "focusedCollaborative",
            self.focused_collaborative,
            PERSONALITY_SCALE_RANGE,
        )
    }
}

fn present<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn parse_string<T: FromStr>(field: &'static str, raw: &str) -> Result<T, InvalidPreferencesError> {
    raw.parse().map_err(|_| InvalidPreferencesError::UnknownVariant {
        field,
        value: raw.to_string(),
    })
}

fn scalar_field<T: FromStr>(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, InvalidPreferencesError> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::String(raw)) => parse_string(field, raw).map(Some),
        Some(_) => Err(InvalidPreferencesError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn list_field<T: FromStr>(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<T>, InvalidPreferencesError> {
    let items = match present(object, field) {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(InvalidPreferencesError::WrongType {
                field,
                expected: "an array",
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(raw) => parse_string(field, raw),
            _ => Err(InvalidPreferencesError::WrongType {
                field,
                expected: "an array of strings",
            }),
        })
        .collect()
}

fn integer_field(
    object: &Map<String, Value>,
    field: &'static str,
    (min, max): (u8, u8),
) -> Result<Option<u8>, InvalidPreferencesError> {
    let Some(value) = present(object, field) else {
        return Ok(None);
    };

    let raw = value.as_i64().ok_or(InvalidPreferencesError::WrongType {
        field,
        expected: "an integer",
    })?;

    if raw < i64::from(min) || raw > i64::from(max) {
        return Err(InvalidPreferencesError::OutOfRange {
            field,
            value: raw,
            min: i64::from(min),
            max: i64::from(max),
        });
    }

    // in range, so it fits
    Ok(u8::try_from(raw).ok())
}

fn check_range(
    field: &'static str,
    value: Option<u8>,
    (min, max): (u8, u8),
) -> Result<(), InvalidPreferencesError> {
    match value {
        Some(v) if v < min || v > max => Err(InvalidPreferencesError::OutOfRange {
            field,
            value: i64::from(v),
            min: i64::from(min),
            max: i64::from(max),
        }),
        _ => Ok(()),
    }
}
