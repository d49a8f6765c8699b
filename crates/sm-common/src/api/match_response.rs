use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{MatchScore, RankingConfig, DEFAULT_MATCH_LIMIT, DEFAULT_MIN_SCORE};

/// Ranked matches for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub matches: Vec<MatchScore>,
    /// Number of entries in `matches`.
    pub total: usize,
    /// Set when the request could not be ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn new(matches: Vec<MatchScore>, generated_at: DateTime<Utc>) -> Self {
        Self {
            total: matches.len(),
            matches,
            message: None,
            generated_at,
        }
    }

    /// An empty result carrying an explanation for the caller.
    pub fn empty(message: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            matches: Vec::new(),
            total: 0,
            message: Some(message.into()),
            generated_at,
        }
    }
}

/// Ranking tunables read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// `SM_MIN_SCORE`, default 30
    pub min_score: u8,
    /// `SM_MATCH_LIMIT`, default 20
    pub limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl MatchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            min_score: lookup("SM_MIN_SCORE")
                .and_then(|s| s.trim().parse::<u8>().ok())
                .filter(|score| *score <= 100)
                .unwrap_or(defaults.min_score),
            limit: lookup("SM_MATCH_LIMIT")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(defaults.limit),
        }
    }

    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            min_score: self.min_score,
            limit: self.limit,
            ..RankingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, 18, 30, 0).unwrap()
    }

    #[test]
    fn empty_response_serializes_message() {
        let response = MatchResponse::empty("user preferences are missing", fixed_now());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["matches"], serde_json::json!([]));
        assert_eq!(json["total"], 0);
        assert_eq!(json["message"], "user preferences are missing");
        assert_eq!(json["generatedAt"], "2024-09-02T18:30:00Z");
    }

    #[test]
    fn successful_response_omits_message() {
        let response = MatchResponse::new(Vec::new(), fixed_now());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("message").is_none());
        assert_eq!(json["total"], 0);
    }

    #[test]
    fn config_reads_overrides() {
        let env: HashMap<&str, &str> = [("SM_MIN_SCORE", "55"), ("SM_MATCH_LIMIT", " 7 ")]
            .into_iter()
            .collect();
        let config = MatchConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.min_score, 55);
        assert_eq!(config.limit, 7);
    }

    #[test]
    fn config_falls_back_on_bad_values() {
        let env: HashMap<&str, &str> = [("SM_MIN_SCORE", "150"), ("SM_MATCH_LIMIT", "lots")]
            .into_iter()
            .collect();
        let config = MatchConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config, MatchConfig::default());
        assert_eq!(MatchConfig::from_lookup(|_| None), MatchConfig::default());
    }

    #[test]
    fn ranking_config_keeps_default_weights() {
        let config = MatchConfig {
            min_score: 0,
            limit: 3,
        }
        .ranking_config();

        assert_eq!(config.min_score, 0);
        assert_eq!(config.limit, 3);
        assert_eq!(config.weights, RankingConfig::default().weights);
    }
}
