//! OneLove Reco - match relevance scoring for the OneLove dating app
//!
//! This library provides the recommendation core used by the OneLove dating
//! app: a weighted relevance scorer over heterogeneous profile signals, a
//! ranker over candidate pools, and an interest-weight learner fed by
//! like/dislike history.
//!
//! All operations are pure and synchronous; fetching profiles, persisting
//! learned weights and filtering blocked users are the caller's business.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    distance::haversine_distance, learn_interest_weights, RecommendationEngine, NEUTRAL_SCORE,
};
pub use crate::models::{Profile, ScoredCandidate, ScoringWeights};
