//! # Recommendation Engine
//!
//! Coordinates the whole recommendation pipeline:
//! 1. Query eligible candidates (hard filters + criteria)
//! 2. Exclude candidates inside their repeat cooldown
//! 3. Score the survivors against history and criteria
//! 4. Weighted-random selection from the top pool
//! 5. Attach a compatible warmup and cooldown (non-yoga only)
//!
//! Each request is self-contained: bounded reads plus O(candidates)
//! computation, no retries, no shared mutable state. An empty candidate
//! set is reported (`NoCandidates`) and never masked by relaxing
//! filters.

use crate::companions::{pick_companion, CompanionPair};
use crate::cooldown::cooldown_cutoff;
use crate::criteria::RecommendCriteria;
use crate::error::{RecommendError, Result};
use crate::scoring::{score_workout, ScoredCandidate};
use crate::selection::pick_weighted;
use crate::traits::{SessionHistory, WorkoutCatalog};
use catalog::{Category, Workout};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Pipeline stages of one request, in order. Used for instrumentation;
/// a request either runs through to `Done` or stops at the first
/// failing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filtering,
    CooldownCheck,
    Scoring,
    Selecting,
    CompanionLookup,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Filtering => "filtering",
            Stage::CooldownCheck => "cooldown-check",
            Stage::Scoring => "scoring",
            Stage::Selecting => "selecting",
            Stage::CompanionLookup => "companion-lookup",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A complete recommendation: the main workout plus optional companions.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub workout: Workout,
    pub warmup: Option<Workout>,
    pub cooldown: Option<Workout>,
    /// Score of the selected workout at selection time
    pub score: i64,
}

/// The engine itself. Generic over its storage collaborators so tests
/// can drive it with in-memory fakes; the random source is injected per
/// call for the same reason.
#[derive(Clone)]
pub struct RecommendationEngine<S> {
    store: S,
}

impl<S> RecommendationEngine<S>
where
    S: WorkoutCatalog + SessionHistory,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Recommend today's workout.
    pub async fn recommend<R: Rng>(
        &self,
        criteria: &RecommendCriteria,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Recommendation> {
        let filter = criteria.to_filter();
        let candidates = self.store.workouts(&filter).await?;
        debug!(stage = %Stage::Filtering, count = candidates.len(), yoga = criteria.yoga, "queried candidates");

        let eligible = self.exclude_cooled_down(candidates, today).await?;
        debug!(stage = %Stage::CooldownCheck, count = eligible.len(), "after cooldown exclusion");

        let scored = self.score_all(eligible, criteria).await?;
        debug!(stage = %Stage::Scoring, count = scored.len(), "scored candidates");

        let Some(selected) = pick_weighted(scored, rng) else {
            return Err(RecommendError::NoCandidates {
                yoga: criteria.yoga,
            });
        };
        info!(
            stage = %Stage::Selecting,
            workout = %selected.workout.id,
            score = selected.score,
            "selected workout"
        );

        // Yoga sessions are self-contained; no warmup/cooldown pairing.
        let companions = if criteria.yoga || selected.workout.category == Category::Yoga {
            CompanionPair::default()
        } else {
            self.lookup_companions(&selected.workout.primary_target, rng)
                .await?
        };
        debug!(
            stage = %Stage::CompanionLookup,
            warmup = companions.warmup.as_ref().map(|w| w.id.as_str()),
            cooldown = companions.cooldown.as_ref().map(|w| w.id.as_str()),
            "companions attached"
        );

        Ok(Recommendation {
            workout: selected.workout,
            warmup: companions.warmup,
            cooldown: companions.cooldown,
            score: selected.score,
        })
    }

    /// Standalone companion lookup for an already-chosen workout. Yoga
    /// sessions get an empty pair.
    pub async fn companions_for<R: Rng>(
        &self,
        workout_id: &str,
        rng: &mut R,
    ) -> Result<CompanionPair> {
        let workout = self.store.workout(workout_id).await?;
        if workout.category == Category::Yoga {
            return Ok(CompanionPair::default());
        }
        self.lookup_companions(&workout.primary_target, rng).await
    }

    async fn exclude_cooled_down(
        &self,
        candidates: Vec<Workout>,
        today: NaiveDate,
    ) -> Result<Vec<Workout>> {
        let mut eligible = Vec::with_capacity(candidates.len());
        for workout in candidates {
            if let Some(cutoff) = cooldown_cutoff(today, workout.repeat_cooldown_days) {
                if self.store.completed_since(&workout.id, cutoff).await? {
                    debug!(workout = %workout.id, %cutoff, "excluded by cooldown");
                    continue;
                }
            }
            eligible.push(workout);
        }
        Ok(eligible)
    }

    async fn score_all(
        &self,
        eligible: Vec<Workout>,
        criteria: &RecommendCriteria,
    ) -> Result<Vec<ScoredCandidate>> {
        let mut scored = Vec::with_capacity(eligible.len());
        for workout in eligible {
            let stats = self.store.stats(&workout.id).await?;
            let score = score_workout(&workout, &stats, criteria.target.as_deref());
            scored.push(ScoredCandidate { workout, score });
        }
        Ok(scored)
    }

    async fn lookup_companions<R: Rng>(
        &self,
        target: &str,
        rng: &mut R,
    ) -> Result<CompanionPair> {
        let warmups = self.store.companion_pool(Category::Warmup, target).await?;
        let warmup = pick_companion(&warmups, rng);
        let cooldowns = self
            .store
            .companion_pool(Category::Cooldown, target)
            .await?;
        let cooldown = pick_companion(&cooldowns, rng);
        Ok(CompanionPair { warmup, cooldown })
    }
}
