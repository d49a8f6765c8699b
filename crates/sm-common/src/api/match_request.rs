use serde::Deserialize;
use serde_json::Value;

use crate::matching::CandidateFilters;
use crate::preferences::{Candidate, InvalidPreferencesError, UserPreferences};

/// A match request as assembled by the calling boundary: the requesting
/// student's preferences plus the candidate population to rank.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRequest {
    pub user: UserPreferences,
    pub candidates: Vec<Candidate>,
    pub filters: Option<CandidateFilters>,
    /// Restrict to candidates taking this course.
    pub course: Option<String>,
    pub min_score: Option<u8>,
    pub limit: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum MatchRequestError {
    #[error("match request must be a JSON object")]
    NotAnObject,
    #[error("match request is missing `{0}`")]
    MissingField(&'static str),
    #[error("`candidates` must be an array")]
    CandidatesNotAnArray,
    #[error("candidate #{index} is malformed: {reason}")]
    MalformedCandidate { index: usize, reason: &'static str },
    #[error("invalid preferences for {owner}: {source}")]
    InvalidPreferences {
        owner: String,
        #[source]
        source: InvalidPreferencesError,
    },
    #[error("invalid request options: {0}")]
    Options(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RequestOptions {
    filters: Option<CandidateFilters>,
    course: Option<String>,
    min_score: Option<u8>,
    limit: Option<usize>,
}

impl MatchRequest {
    /// Validate an untyped request body. Preference documents go through
    /// [`UserPreferences::from_json`] so type errors name the offending field.
    pub fn from_json(value: &Value) -> Result<Self, MatchRequestError> {
        let object = value.as_object().ok_or(MatchRequestError::NotAnObject)?;

        let user_doc = object
            .get("user")
            .ok_or(MatchRequestError::MissingField("user"))?;
        let user = UserPreferences::from_json(user_doc).map_err(|source| {
            MatchRequestError::InvalidPreferences {
                owner: "user".into(),
                source,
            }
        })?;

        let candidates: Vec<Candidate> = match object.get("candidates") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| parse_candidate(index, item))
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(MatchRequestError::CandidatesNotAnArray),
        };

        let options: RequestOptions = serde_json::from_value(value.clone())?;

        Ok(Self {
            user,
            candidates,
            filters: options.filters,
            course: options.course.filter(|c| !c.trim().is_empty()),
            min_score: options.min_score,
            limit: options.limit,
        })
    }
}

fn parse_candidate(index: usize, item: &Value) -> Result<Candidate, MatchRequestError> {
    let object = item.as_object().ok_or(MatchRequestError::MalformedCandidate {
        index,
        reason: "expected an object",
    })?;

    let user_id = match object.get("userId") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            return Err(MatchRequestError::MalformedCandidate {
                index,
                reason: "`userId` must be a string or number",
            })
        }
    };

    let preferences = match object.get("preferences") {
        None | Some(Value::Null) => UserPreferences::default(),
        Some(doc) => UserPreferences::from_json(doc).map_err(|source| {
            MatchRequestError::InvalidPreferences {
                owner: format!("candidate {user_id}"),
                source,
            }
        })?,
    };

    Ok(Candidate {
        user_id,
        preferences,
    })
}
