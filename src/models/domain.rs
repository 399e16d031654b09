use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The slice of a user document that relevance scoring reads.
///
/// Field names mirror the upstream user documents (camelCase keys). Every
/// attribute except `verification_level` is optional; scoring treats an
/// absent attribute as "signal unavailable" rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub age: Option<u8>,
    /// Youngest candidate age this user accepts.
    #[serde(rename = "minAgePreference", default)]
    pub min_age_preference: Option<u8>,
    /// Oldest candidate age this user accepts.
    #[serde(rename = "maxAgePreference", default)]
    pub max_age_preference: Option<u8>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Search radius in kilometers.
    #[serde(rename = "maxDistance", default)]
    pub max_distance_km: Option<f64>,
    #[serde(default)]
    pub interests: Option<HashSet<String>>,
    /// Relationship-intent tags ("longterm", "casual", ...).
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Option<HashSet<String>>,
    /// 0 = unverified, 1 = basic, 2 = medium, 3+ = fully verified.
    #[serde(rename = "verificationLevel", default)]
    pub verification_level: u8,
}

impl Profile {
    /// The accepted candidate age range, when fully stated.
    pub fn age_preference(&self) -> Option<(u8, u8)> {
        match (self.min_age_preference, self.max_age_preference) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Coordinates as (latitude, longitude), when both are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A candidate paired with its computed relevance.
///
/// Produced by ranking and consumed immediately by the caller; nothing in
/// this crate persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub profile: Profile,
    /// Overall relevance in [0, 1], higher is better.
    pub relevance: f64,
}

/// Relative weights of the relevance sub-scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub age: f64,
    pub distance: f64,
    pub interests: f64,
    pub intent: f64,
    pub verification: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 0.25,
            distance: 0.25,
            interests: 0.20,
            intent: 0.20,
            verification: 0.10,
        }
    }
}
