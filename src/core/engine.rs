use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::core::scoring::{try_relevance_score, NEUTRAL_SCORE};
use crate::models::{Profile, ScoredCandidate, ScoringWeights};

/// Match recommendation orchestrator
///
/// Wraps the relevance scorer with a configured weight set and ranks
/// candidate pools. Stateless apart from its weights: one instance can
/// serve any number of concurrent callers without synchronization.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Relevance of `candidate` for `viewer`, in [0, 1]
    ///
    /// Total: an internal scoring fault is logged and mapped to the neutral
    /// 0.5 so that ranking degrades instead of failing.
    pub fn calculate_relevance_score(&self, viewer: &Profile, candidate: &Profile) -> f64 {
        match try_relevance_score(viewer, candidate, &self.weights) {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    "relevance scoring failed for candidate {}: {}",
                    candidate.user_id, e
                );
                NEUTRAL_SCORE
            }
        }
    }

    /// Score and rank a candidate pool for `viewer`, best first
    ///
    /// Every candidate is kept regardless of score; callers are expected to
    /// pre-filter blocked or already-seen users. The sort is stable, so
    /// candidates with equal scores keep their input order.
    pub fn score_candidates(
        &self,
        viewer: &Profile,
        candidates: Vec<Profile>,
    ) -> Vec<ScoredCandidate> {
        let total = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|profile| {
                let relevance = self.calculate_relevance_score(viewer, &profile);
                ScoredCandidate { profile, relevance }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        });

        debug!("ranked {} candidates for user {}", total, viewer.user_id);

        scored
    }

    /// Ranked profiles only, for callers that do not need the scores
    pub fn recommend(&self, viewer: &Profile, candidates: Vec<Profile>) -> Vec<Profile> {
        self.score_candidates(viewer, candidates)
            .into_iter()
            .map(|scored| scored.profile)
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, age: u8, verification_level: u8) -> Profile {
        Profile {
            user_id: id.to_string(),
            age: Some(age),
            verification_level,
            ..Profile::default()
        }
    }

    fn viewer() -> Profile {
        Profile {
            user_id: "viewer".to_string(),
            age: Some(30),
            min_age_preference: Some(25),
            max_age_preference: Some(35),
            ..Profile::default()
        }
    }

    #[test]
    fn test_recommend_orders_best_first() {
        let engine = RecommendationEngine::with_default_weights();

        let candidates = vec![
            candidate("edge", 25, 0),
            candidate("midpoint", 30, 0),
            candidate("near", 28, 0),
        ];

        let ranked = engine.recommend(&viewer(), candidates);

        let ids: Vec<&str> = ranked.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["midpoint", "near", "edge"]);
    }

    #[test]
    fn test_recommend_keeps_every_candidate() {
        let engine = RecommendationEngine::with_default_weights();

        // One candidate is far outside the age range and scores zero, but
        // ranking never drops anyone
        let candidates = vec![candidate("in_range", 30, 0), candidate("too_old", 60, 0)];

        let ranked = engine.recommend(&viewer(), candidates);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].user_id, "too_old");
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let engine = RecommendationEngine::with_default_weights();

        // Identical signals, distinct identities
        let candidates = vec![
            candidate("first", 28, 1),
            candidate("second", 28, 1),
            candidate("third", 28, 1),
        ];

        let ranked = engine.score_candidates(&viewer(), candidates);

        assert!((ranked[0].relevance - ranked[1].relevance).abs() < 1e-12);
        let ids: Vec<&str> = ranked.iter().map(|s| s.profile.user_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let engine = RecommendationEngine::with_default_weights();
        let viewer = viewer();

        for age in [18u8, 25, 30, 35, 80] {
            for level in [0u8, 1, 2, 3] {
                let score =
                    engine.calculate_relevance_score(&viewer, &candidate("c", age, level));
                assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn test_fault_maps_to_neutral_score() {
        let engine = RecommendationEngine::new(ScoringWeights {
            age: f64::NAN,
            ..ScoringWeights::default()
        });

        let score = engine.calculate_relevance_score(&viewer(), &candidate("c", 30, 0));
        assert_eq!(score, NEUTRAL_SCORE);
    }

    #[test]
    fn test_empty_pool() {
        let engine = RecommendationEngine::default();
        assert!(engine.recommend(&viewer(), vec![]).is_empty());
    }
}
