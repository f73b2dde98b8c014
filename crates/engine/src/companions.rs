//! Warmup/cooldown companion selection.

use catalog::Workout;
use rand::Rng;
use serde::Serialize;

/// The optional warmup and cooldown attached to a recommendation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanionPair {
    pub warmup: Option<Workout>,
    pub cooldown: Option<Workout>,
}

/// Uniform pick from an already-shortlisted companion pool (the shortest
/// five matching the target, per the catalog query). An empty pool just
/// means no companion.
pub fn pick_companion<R: Rng>(pool: &[Workout], rng: &mut R) -> Option<Workout> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Equipment, Intensity, LinkStatus};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn warmup(id: &str) -> Workout {
        Workout {
            id: id.to_string(),
            video_id: format!("vid-{id}"),
            title: id.to_string(),
            channel_name: "Test Channel".into(),
            channel_code: None,
            video_url: "https://example.com".into(),
            category: Category::Warmup,
            primary_target: "Full Body".into(),
            target_tag1: None,
            target_tag2: None,
            intensity: Intensity::Low,
            duration_min: 5,
            equipment: Equipment::None,
            vetted: true,
            do_not_recommend: false,
            rating: None,
            repeat_cooldown_days: 0,
            link_status: LinkStatus::Ok,
            last_checked: None,
            notes: None,
        }
    }

    #[test]
    fn empty_pool_means_no_companion() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(pick_companion(&[], &mut rng).is_none());
    }

    #[test]
    fn every_pool_member_is_reachable() {
        let pool: Vec<_> = (0..5).map(|i| warmup(&format!("YF-WU0{i}"))).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_companion(&pool, &mut rng).unwrap().id);
        }
        assert_eq!(seen.len(), 5);
    }
}
