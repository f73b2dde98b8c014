//! Desirability scoring for candidate workouts.

use catalog::{HistoryStats, Workout};

/// Score for exactly matching the requested primary target.
const PRIMARY_TARGET_BONUS: i64 = 15;
/// Score for matching the requested target on a secondary tag.
const TAG_BONUS: i64 = 5;
/// Score removed per lifetime completion.
const COMPLETION_PENALTY: i64 = 10;
/// Score added per rating point (1-4).
const RATING_WEIGHT: i64 = 2;

/// A candidate paired with its score; the unit the selector works over.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub workout: Workout,
    pub score: i64,
}

/// Compute the desirability score of one candidate.
///
/// `score = 100 - 10 * completions + target_bonus + rating_bonus`.
/// Linear and deliberately unbounded below: a workout completed very
/// often goes deeply negative and still participates in selection, just
/// with near-floor weight.
pub fn score_workout(
    workout: &Workout,
    stats: &HistoryStats,
    requested_target: Option<&str>,
) -> i64 {
    let mut score = 100 - COMPLETION_PENALTY * stats.count;

    if let Some(target) = requested_target {
        if workout.primary_target == target {
            score += PRIMARY_TARGET_BONUS;
        } else if workout.has_tag(target) {
            score += TAG_BONUS;
        }
    }

    if let Some(rating) = workout.rating {
        score += RATING_WEIGHT * rating;
    }

    score
}
