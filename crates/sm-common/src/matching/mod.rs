//! Compatibility matching: nine weighted sub-scores per candidate, human-readable
//! reasons, ranking with a score floor and limit, and a hard-constraint pre-filter.
//!
//! Everything here is pure and synchronous; callers supply preference records
//! and receive [`MatchScore`]s.

pub mod dimensions;
pub mod prefilter;
pub mod ranking;
pub mod reasons;
pub mod scoring;
pub mod shared;
pub mod weights;

pub use dimensions::NEUTRAL_SCORE;
pub use prefilter::{filter_candidates_by_preferences, CandidateFilters};
pub use ranking::{
    find_best_matches, MatchingEngine, RankingConfig, DEFAULT_MATCH_LIMIT, DEFAULT_MIN_SCORE,
};
pub use scoring::{calculate_match_score, DimensionScores, MatchScore, ScoreBreakdown};
pub use shared::shared_items;
pub use weights::{Dimension, MatchingWeights, DEFAULT_MATCHING_WEIGHTS};
