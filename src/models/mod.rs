// Model exports
pub mod domain;

pub use domain::{Profile, ScoredCandidate, ScoringWeights};
