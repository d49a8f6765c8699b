use tracing::debug;

use super::{
    prefilter::{filter_candidates_by_preferences, CandidateFilters},
    scoring::{calculate_match_score, MatchScore},
    weights::{MatchingWeights, DEFAULT_MATCHING_WEIGHTS},
};
use crate::preferences::{Candidate, UserPreferences};

pub const DEFAULT_MIN_SCORE: u8 = 30;
pub const DEFAULT_MATCH_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub weights: MatchingWeights,
    /// Candidates scoring below this (0-100) are dropped.
    pub min_score: u8,
    /// Maximum number of results returned.
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_MATCHING_WEIGHTS,
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

/// Stateless ranking over a candidate population. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: RankingConfig,
}

impl MatchingEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn score(&self, user: &UserPreferences, candidate: &Candidate) -> MatchScore {
        calculate_match_score(
            user,
            &candidate.preferences,
            &self.config.weights,
            &candidate.user_id,
        )
    }

    /// Score every candidate, drop those under `min_score`, sort by score
    /// (ties keep input order) and keep the first `limit`.
    pub fn rank(&self, user: &UserPreferences, candidates: &[Candidate]) -> Vec<MatchScore> {
        if self.config.limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<_> = candidates
            .iter()
            .map(|candidate| self.score(user, candidate))
            .filter(|m| m.score >= self.config.min_score)
            .collect();
        let kept = matches.len();

        // stable: equal scores stay in candidate order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.config.limit);

        debug!(
            candidates = candidates.len(),
            above_min_score = kept,
            returned = matches.len(),
            min_score = self.config.min_score,
            "ranked study partner candidates"
        );

        matches
    }

    /// Rank only candidates taking `course`, when one is given.
    pub fn rank_for_course(
        &self,
        user: &UserPreferences,
        candidates: &[Candidate],
        course: Option<&str>,
    ) -> Vec<MatchScore> {
        match course {
            Some(course) => {
                let filters = CandidateFilters {
                    courses: vec![course.to_string()],
                    ..CandidateFilters::default()
                };
                let filtered = filter_candidates_by_preferences(candidates, &filters);
                self.rank(user, &filtered)
            }
            None => self.rank(user, candidates),
        }
    }
}

/// Rank candidates with the default weights.
pub fn find_best_matches(
    user: &UserPreferences,
    candidates: &[Candidate],
    min_score: u8,
    limit: usize,
) -> Vec<MatchScore> {
    MatchingEngine::new(RankingConfig {
        weights: DEFAULT_MATCHING_WEIGHTS,
        min_score,
        limit,
    })
    .rank(user, candidates)
}
