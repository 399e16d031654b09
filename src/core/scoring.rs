use thiserror::Error;

use crate::core::distance::haversine_distance;
use crate::models::{Profile, ScoringWeights};

/// Score substituted when relevance cannot be computed, keeping ranking total.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Fixed sub-score for an age preference collapsed to a single year.
const NARROW_RANGE_SCORE: f64 = 0.8;

/// Fixed low sub-score when either side has an empty interest or intent set.
const EMPTY_SET_SCORE: f64 = 0.1;

/// Internal scoring fault. Never reaches callers; the engine maps it to
/// [`NEUTRAL_SCORE`].
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("non-finite {0} sub-score")]
    NonFiniteSubScore(&'static str),

    #[error("non-finite combined score")]
    NonFiniteTotal,
}

/// Calculate the relevance (0-1) of `candidate` for `viewer`
///
/// Scoring formula:
/// score = (
///     age_score * 0.25 +          # within viewer's range, near its midpoint
///     proximity_score * 0.25 +    # closer = higher
///     interests_score * 0.20 +    # Jaccard overlap of interest sets
///     intent_score * 0.20 +       # shared lookingFor tags
///     verification_score * 0.10   # candidate's verification level
/// ) / sum of weights of the available signals
///
/// A signal whose inputs are missing is dropped from both the numerator and
/// the denominator, so profiles with different gaps stay comparable. A
/// computed zero (out-of-range age, disjoint intent) still counts as an
/// available signal and drags the score down with its full weight.
pub fn try_relevance_score(
    viewer: &Profile,
    candidate: &Profile,
    weights: &ScoringWeights,
) -> Result<f64, ScoreError> {
    let signals = [
        ("age", age_compatibility(viewer, candidate), weights.age),
        (
            "proximity",
            location_proximity(viewer, candidate),
            weights.distance,
        ),
        (
            "interests",
            interest_similarity(viewer, candidate),
            weights.interests,
        ),
        (
            "intent",
            intent_compatibility(viewer, candidate),
            weights.intent,
        ),
        (
            "verification",
            Some(verification_score(candidate)),
            weights.verification,
        ),
    ];

    let mut score = 0.0;
    let mut weight_total = 0.0;

    for (name, sub_score, weight) in signals {
        if let Some(value) = sub_score {
            if !value.is_finite() {
                return Err(ScoreError::NonFiniteSubScore(name));
            }
            score += value * weight;
            weight_total += weight;
        }
    }

    if weight_total <= 0.0 {
        return Ok(0.0);
    }

    let total = score / weight_total;
    if !total.is_finite() {
        return Err(ScoreError::NonFiniteTotal);
    }

    Ok(total.clamp(0.0, 1.0))
}

/// Age compatibility sub-score (0-1)
///
/// Requires the viewer's age, the candidate's age and the viewer's full
/// preferred range. A candidate outside the viewer's range scores zero, as
/// does a viewer outside the candidate's stated range; a candidate with no
/// stated range accepts anyone. Within range, candidates closer to the
/// middle of the viewer's range score higher.
#[inline]
fn age_compatibility(viewer: &Profile, candidate: &Profile) -> Option<f64> {
    let viewer_age = viewer.age?;
    let candidate_age = candidate.age?;
    let (min_age, max_age) = viewer.age_preference()?;

    let in_viewer_range = (min_age..=max_age).contains(&candidate_age);
    let in_candidate_range = match candidate.age_preference() {
        Some((min, max)) => (min..=max).contains(&viewer_age),
        None => true,
    };

    if !(in_viewer_range && in_candidate_range) {
        return Some(0.0);
    }

    let midpoint = (min_age as f64 + max_age as f64) / 2.0;
    let half_width = (max_age as f64 - min_age as f64) / 2.0;

    if half_width <= 0.0 {
        return Some(NARROW_RANGE_SCORE);
    }

    let deviation = (candidate_age as f64 - midpoint).abs() / half_width;
    Some(1.0 - deviation.min(1.0))
}

/// Location proximity sub-score (0-1)
///
/// Requires coordinates on both profiles and a positive search radius on
/// the viewer. Candidates beyond the radius score zero; inside it the score
/// falls off linearly with distance.
#[inline]
fn location_proximity(viewer: &Profile, candidate: &Profile) -> Option<f64> {
    let (viewer_lat, viewer_lon) = viewer.coordinates()?;
    let (candidate_lat, candidate_lon) = candidate.coordinates()?;
    let max_distance = viewer.max_distance_km.filter(|d| *d > 0.0)?;

    let distance = haversine_distance(viewer_lat, viewer_lon, candidate_lat, candidate_lon);
    if distance > max_distance {
        return Some(0.0);
    }

    Some(1.0 - (distance / max_distance).min(1.0))
}

/// Interest similarity sub-score (0-1): Jaccard overlap of the two sets.
///
/// An empty set on either side yields a fixed low score instead of zero; a
/// user who has not picked interests is unknown, not incompatible.
#[inline]
fn interest_similarity(viewer: &Profile, candidate: &Profile) -> Option<f64> {
    let viewer_interests = viewer.interests.as_ref()?;
    let candidate_interests = candidate.interests.as_ref()?;

    if viewer_interests.is_empty() || candidate_interests.is_empty() {
        return Some(EMPTY_SET_SCORE);
    }

    let common = viewer_interests.intersection(candidate_interests).count();
    let union = viewer_interests.len() + candidate_interests.len() - common;

    Some(common as f64 / union as f64)
}

/// Relationship-intent sub-score (0-1) over the lookingFor tags.
///
/// Unlike interests, disjoint non-empty sets score a hard zero: wanting
/// different things is disqualifying, not merely low-signal.
#[inline]
fn intent_compatibility(viewer: &Profile, candidate: &Profile) -> Option<f64> {
    let viewer_intent = viewer.looking_for.as_ref()?;
    let candidate_intent = candidate.looking_for.as_ref()?;

    if viewer_intent.is_empty() || candidate_intent.is_empty() {
        return Some(EMPTY_SET_SCORE);
    }

    let common = viewer_intent.intersection(candidate_intent).count();
    if common == 0 {
        return Some(0.0);
    }

    Some(common as f64 / viewer_intent.len().min(candidate_intent.len()) as f64)
}

/// Verification sub-score: trust in the candidate grows with their level.
#[inline]
fn verification_score(candidate: &Profile) -> f64 {
    match candidate.verification_level {
        0 => 0.0,
        1 => 0.5,
        2 => 0.8,
        _ => 1.0,
    }
}
