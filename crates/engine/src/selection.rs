//! Weighted random selection over scored candidates.
//!
//! Always picking the top score would make the recommendation feel
//! repetitive, so selection draws from a pool of top candidates with
//! probability increasing in score. The whole thing is a pure function
//! of the scored list and the injected random source, which keeps it
//! reproducible under a seeded rng.

use crate::scoring::ScoredCandidate;
use rand::Rng;
use tracing::debug;

/// Minimum pool size when enough candidates are available.
const MIN_POOL: usize = 30;
/// Exponent sharpening the preference for high scores.
const WEIGHT_EXPONENT: f64 = 1.5;
/// Weight floor so every pooled candidate keeps a strictly positive
/// selection probability.
const WEIGHT_FLOOR: f64 = 0.1;

/// Number of top-scoring candidates selection draws from:
/// `max(30, floor(n / 2))`, capped at `n`.
pub fn pool_size(candidate_count: usize) -> usize {
    candidate_count.min(MIN_POOL.max(candidate_count / 2))
}

/// Pick one candidate by weighted random draw.
///
/// ## Algorithm
/// 1. Sort descending by score (ties broken by id so a seeded rng is
///    fully deterministic).
/// 2. Truncate to the pool.
/// 3. Normalize scores into `[0, 1]` over the pool's range (range floored
///    at 1 to avoid dividing by zero), weight each as
///    `normalized^1.5 + 0.1`.
/// 4. Draw uniform in `[0, total)` and walk the pool subtracting weights
///    until the remainder drops to `<= 0`.
///
/// Returns `None` only for an empty input.
pub fn pick_weighted<R: Rng>(
    mut scored: Vec<ScoredCandidate>,
    rng: &mut R,
) -> Option<ScoredCandidate> {
    if scored.is_empty() {
        return None;
    }

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.workout.id.cmp(&b.workout.id))
    });
    let pool = pool_size(scored.len());
    scored.truncate(pool);

    let max_score = scored.first().map(|c| c.score).unwrap_or_default() as f64;
    let min_score = scored.last().map(|c| c.score).unwrap_or_default() as f64;
    let range = (max_score - min_score).max(1.0);

    let weights: Vec<f64> = scored
        .iter()
        .map(|c| ((c.score as f64 - min_score) / range).powf(WEIGHT_EXPONENT) + WEIGHT_FLOOR)
        .collect();
    let total: f64 = weights.iter().sum();

    let mut remaining = rng.gen_range(0.0..total);
    let mut selected = 0;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            selected = index;
            break;
        }
    }

    debug!(
        pool = pool,
        selected = %scored[selected].workout.id,
        score = scored[selected].score,
        "weighted selection"
    );
    Some(scored.swap_remove(selected))
}
