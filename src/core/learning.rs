use std::collections::HashMap;

use crate::models::Profile;

/// Accumulator credit for an interest seen on a liked profile.
const LIKE_CREDIT: f64 = 1.0;

/// Accumulator credit for an interest seen on a disliked profile.
const DISLIKE_CREDIT: f64 = -0.5;

/// Derive per-interest weights from swipe history
///
/// Every interest on a liked profile earns +1.0 and every interest on a
/// disliked profile -0.5, summed across the whole history. A non-empty
/// result is min-max normalized into [0, 1]; when all accumulated values
/// are equal the raw values are returned unchanged.
///
/// The map is advisory output: the relevance scorer does not consume it.
/// Callers own persistence and any future integration into scoring.
pub fn learn_interest_weights(
    liked: &[Profile],
    disliked: &[Profile],
) -> HashMap<String, f64> {
    let mut weights: HashMap<String, f64> = HashMap::new();

    for profile in liked {
        for interest in profile.interests.iter().flatten() {
            *weights.entry(interest.clone()).or_insert(0.0) += LIKE_CREDIT;
        }
    }

    for profile in disliked {
        for interest in profile.interests.iter().flatten() {
            *weights.entry(interest.clone()).or_insert(0.0) += DISLIKE_CREDIT;
        }
    }

    if weights.is_empty() {
        return weights;
    }

    let min = weights.values().fold(f64::INFINITY, |acc, v| acc.min(*v));
    let max = weights.values().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));
    let range = max - min;

    if range > 0.0 {
        for value in weights.values_mut() {
            *value = (*value - min) / range;
        }
    }

    weights
}
