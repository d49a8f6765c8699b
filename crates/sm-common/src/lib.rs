//! Compatibility matching for study partners: preference model, scoring,
//! ranking and the request/response boundary.

pub mod api;
pub mod logging;
pub mod matching;
pub mod preferences;

pub use matching::{
    calculate_match_score, filter_candidates_by_preferences, find_best_matches, CandidateFilters,
    MatchScore, MatchingEngine, MatchingWeights, RankingConfig, ScoreBreakdown,
    DEFAULT_MATCHING_WEIGHTS,
};
pub use preferences::{Candidate, InvalidPreferencesError, UserPreferences};
