//! Request/response boundary for the matcher.

pub mod match_request;
pub mod match_response;

use chrono::{DateTime, Utc};

pub use match_request::{MatchRequest, MatchRequestError};
pub use match_response::{MatchConfig, MatchResponse};

use crate::matching::{filter_candidates_by_preferences, MatchingEngine, RankingConfig};

/// Rank a validated request. Explicit filters apply first, then the course
/// restriction; request options override `config`.
pub fn handle_match_request(
    request: &MatchRequest,
    config: &MatchConfig,
    now: DateTime<Utc>,
) -> MatchResponse {
    let ranking = RankingConfig {
        min_score: request.min_score.unwrap_or(config.min_score),
        limit: request.limit.unwrap_or(config.limit),
        ..config.ranking_config()
    };
    let engine = MatchingEngine::new(ranking);

    let matches = match &request.filters {
        Some(filters) => {
            let filtered = filter_candidates_by_preferences(&request.candidates, filters);
            engine.rank_for_course(&request.user, &filtered, request.course.as_deref())
        }
        None => engine.rank_for_course(&request.user, &request.candidates, request.course.as_deref()),
    };

    MatchResponse::new(matches, now)
}
