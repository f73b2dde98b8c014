//! Integration tests for the catalog store against an in-memory SQLite
//! database.

use catalog::{
    CatalogError, CatalogStore, Category, Equipment, HistoryQuery, Intensity, LinkStatus,
    ListKind, NewHistoryEntry, NewPlanSlot, NewWorkout, PlanDay, WorkoutFilter, WorkoutPatch,
};
use chrono::NaiveDate;

fn new_workout(id: &str, video_id: &str) -> NewWorkout {
    NewWorkout {
        id: id.to_string(),
        video_id: video_id.to_string(),
        title: format!("Workout {id}"),
        channel_name: "Test Channel".to_string(),
        channel_code: Some("TC".to_string()),
        video_url: format!("https://www.youtube.com/watch?v={video_id}"),
        category: Category::Workout,
        primary_target: "Full Body".to_string(),
        target_tag1: None,
        target_tag2: None,
        intensity: Intensity::Medium,
        duration_min: 30,
        equipment: Equipment::None,
        vetted: true,
        do_not_recommend: false,
        rating: None,
        repeat_cooldown_days: 5,
        link_status: LinkStatus::Ok,
        last_checked: None,
        notes: None,
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn insert_rejects_duplicate_video_id() {
    let store = CatalogStore::in_memory().await.unwrap();

    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    let err = store
        .insert_workout(&new_workout("YF-TC02", "aaaaaaaaaaa"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateVideo { .. }));
}

#[tokio::test]
async fn query_matches_target_on_primary_or_either_tag() {
    let store = CatalogStore::in_memory().await.unwrap();

    let mut primary = new_workout("YF-TC01", "aaaaaaaaaaa");
    primary.primary_target = "Legs".to_string();
    store.insert_workout(&primary).await.unwrap();

    let mut tagged = new_workout("YF-TC02", "bbbbbbbbbbb");
    tagged.primary_target = "Upper Body".to_string();
    tagged.target_tag2 = Some("Legs".to_string());
    store.insert_workout(&tagged).await.unwrap();

    let mut unrelated = new_workout("YF-TC03", "ccccccccccc");
    unrelated.primary_target = "Core".to_string();
    store.insert_workout(&unrelated).await.unwrap();

    let filter = WorkoutFilter {
        target: Some("Legs".to_string()),
        ..WorkoutFilter::default()
    };
    let mut found: Vec<String> = store
        .query_workouts(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.id)
        .collect();
    found.sort();
    assert_eq!(found, vec!["YF-TC01", "YF-TC02"]);
}

#[tokio::test]
async fn query_applies_duration_and_channel_filters() {
    let store = CatalogStore::in_memory().await.unwrap();

    let mut short = new_workout("YF-TC01", "aaaaaaaaaaa");
    short.duration_min = 15;
    store.insert_workout(&short).await.unwrap();

    let mut long = new_workout("YF-TC02", "bbbbbbbbbbb");
    long.duration_min = 45;
    long.channel_name = "Other Channel".to_string();
    store.insert_workout(&long).await.unwrap();

    let filter = WorkoutFilter {
        min_duration: Some(20),
        max_duration: Some(60),
        ..WorkoutFilter::default()
    };
    let found = store.query_workouts(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "YF-TC02");

    let filter = WorkoutFilter {
        channels: vec!["Test Channel".to_string()],
        ..WorkoutFilter::default()
    };
    let found = store.query_workouts(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "YF-TC01");
}

#[tokio::test]
async fn patch_updates_fields_and_clears_notes() {
    let store = CatalogStore::in_memory().await.unwrap();
    let mut new = new_workout("YF-TC01", "aaaaaaaaaaa");
    new.notes = Some("keep an eye on form".to_string());
    store.insert_workout(&new).await.unwrap();

    let patch = WorkoutPatch {
        rating: Some(3),
        vetted: Some(false),
        notes: Some(String::new()),
        ..WorkoutPatch::default()
    };
    let updated = store.update_workout("YF-TC01", &patch).await.unwrap();
    assert_eq!(updated.rating, Some(3));
    assert!(!updated.vetted);
    assert_eq!(updated.notes, None);

    let err = store
        .update_workout("YF-TC01", &WorkoutPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::EmptyUpdate));

    let err = store
        .update_workout("YF-XX99", &patch)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::WorkoutNotFound { .. }));
}

#[tokio::test]
async fn history_stats_and_inclusive_cutoff() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    for day in ["2026-08-01", "2026-08-10", "2026-08-20"] {
        store
            .log_session(&NewHistoryEntry {
                date: date(day),
                workout_id: "YF-TC01".to_string(),
                warmup_id: None,
                cooldown_id: None,
                notes: None,
            })
            .await
            .unwrap();
    }

    let stats = store.history_stats("YF-TC01").await.unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.first_date, Some(date("2026-08-01")));
    assert_eq!(stats.last_date, Some(date("2026-08-20")));

    // Boundary is inclusive: an entry exactly on the cutoff date counts.
    assert!(store
        .completed_since("YF-TC01", date("2026-08-20"))
        .await
        .unwrap());
    assert!(!store
        .completed_since("YF-TC01", date("2026-08-21"))
        .await
        .unwrap());

    let empty = store.history_stats("YF-XX99").await.unwrap();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.last_date, None);
}

#[tokio::test]
async fn session_companions_must_match_category() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    let err = store
        .log_session(&NewHistoryEntry {
            date: date("2026-08-01"),
            workout_id: "YF-TC01".to_string(),
            // Points at a plain workout, not a warmup
            warmup_id: Some("YF-TC01".to_string()),
            cooldown_id: None,
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::CompanionNotFound { .. }));
}

#[tokio::test]
async fn history_listing_is_newest_first_and_filterable() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    for day in ["2026-08-01", "2026-08-15"] {
        store
            .log_session(&NewHistoryEntry {
                date: date(day),
                workout_id: "YF-TC01".to_string(),
                warmup_id: None,
                cooldown_id: None,
                notes: None,
            })
            .await
            .unwrap();
    }

    let all = store.history(&HistoryQuery::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, date("2026-08-15"));
    assert_eq!(all[0].workout_title.as_deref(), Some("Workout YF-TC01"));

    let ranged = store
        .history(&HistoryQuery {
            start_date: Some(date("2026-08-10")),
            ..HistoryQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(ranged.len(), 1);
}

#[tokio::test]
async fn plan_upsert_overwrites_and_resets_completed() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();
    store
        .insert_workout(&new_workout("YF-TC02", "bbbbbbbbbbb"))
        .await
        .unwrap();

    let week = date("2026-08-24");
    let slot = store
        .upsert_slot(&NewPlanSlot {
            week_start: week,
            day: PlanDay::Monday,
            workout_id: "YF-TC01".to_string(),
            warmup_id: None,
            cooldown_id: None,
        })
        .await
        .unwrap();
    store.set_completed(slot.id, true).await.unwrap();

    // Saving the same (week, day) replaces the slot and clears completed.
    let replaced = store
        .upsert_slot(&NewPlanSlot {
            week_start: week,
            day: PlanDay::Monday,
            workout_id: "YF-TC02".to_string(),
            warmup_id: None,
            cooldown_id: None,
        })
        .await
        .unwrap();
    assert_eq!(replaced.workout_id, "YF-TC02");
    assert!(!replaced.completed);

    let plan = store.week_plan(week).await.unwrap();
    assert_eq!(plan.len(), 1);

    assert_eq!(store.clear_week(week).await.unwrap(), 1);
    assert!(store.week_plan(week).await.unwrap().is_empty());
}

#[tokio::test]
async fn favorites_round_trip_with_conflicts() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    store
        .add_to_list(ListKind::Favorites, "YF-TC01")
        .await
        .unwrap();
    let err = store
        .add_to_list(ListKind::Favorites, "YF-TC01")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyListed { .. }));

    // The same workout can sit on both lists independently.
    store
        .add_to_list(ListKind::WatchLater, "YF-TC01")
        .await
        .unwrap();

    let favorites = store.list_entries(ListKind::Favorites).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].workout_id, "YF-TC01");

    store
        .remove_from_list(ListKind::Favorites, "YF-TC01")
        .await
        .unwrap();
    let err = store
        .remove_from_list(ListKind::Favorites, "YF-TC01")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotListed { .. }));
}

#[tokio::test]
async fn query_orders_by_title() {
    let store = CatalogStore::in_memory().await.unwrap();

    let mut last = new_workout("YF-TC01", "aaaaaaaaaaa");
    last.title = "Zen Flow".to_string();
    store.insert_workout(&last).await.unwrap();

    let mut first = new_workout("YF-TC02", "bbbbbbbbbbb");
    first.title = "Ab Burner".to_string();
    store.insert_workout(&first).await.unwrap();

    let titles: Vec<String> = store
        .query_workouts(&WorkoutFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.title)
        .collect();
    assert_eq!(titles, vec!["Ab Burner", "Zen Flow"]);
}

#[tokio::test]
async fn playlists_are_unique_per_week_and_renameable() {
    let store = CatalogStore::in_memory().await.unwrap();
    let week = date("2026-08-24");

    store.create_playlist("Deload", week).await.unwrap();
    let err = store.create_playlist("Deload", week).await.unwrap_err();
    assert!(matches!(err, CatalogError::PlaylistExists { .. }));

    // Same name on another week is a different playlist.
    store
        .create_playlist("Deload", date("2026-08-31"))
        .await
        .unwrap();

    let push = store.create_playlist("Push", week).await.unwrap();
    let err = store.rename_playlist(push.id, "Deload").await.unwrap_err();
    assert!(matches!(err, CatalogError::PlaylistExists { .. }));

    // Renaming to its current name is not a conflict.
    let kept = store.rename_playlist(push.id, "Push").await.unwrap();
    assert_eq!(kept.name, "Push");

    let renamed = store.rename_playlist(push.id, "Pull").await.unwrap();
    assert_eq!(renamed.name, "Pull");
    assert_eq!(store.get_playlist(push.id).await.unwrap().name, "Pull");

    let err = store.rename_playlist(9999, "Ghost").await.unwrap_err();
    assert!(matches!(err, CatalogError::PlaylistNotFound(_)));
}

#[tokio::test]
async fn playlist_workout_count_tracks_the_week_plan() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();

    let week = date("2026-08-24");
    for day in [PlanDay::Monday, PlanDay::Wednesday] {
        store
            .upsert_slot(&NewPlanSlot {
                week_start: week,
                day,
                workout_id: "YF-TC01".to_string(),
                warmup_id: None,
                cooldown_id: None,
            })
            .await
            .unwrap();
    }

    let planned = store.create_playlist("Deload", week).await.unwrap();
    assert_eq!(planned.workout_count, 2);

    let empty = store
        .create_playlist("Deload", date("2026-08-31"))
        .await
        .unwrap();
    assert_eq!(empty.workout_count, 0);
}

#[tokio::test]
async fn next_workout_id_continues_channel_sequence() {
    let store = CatalogStore::in_memory().await.unwrap();
    assert_eq!(store.next_workout_id("FM").await.unwrap(), "YF-FM01");

    store
        .insert_workout(&new_workout("YF-FM07", "aaaaaaaaaaa"))
        .await
        .unwrap();
    assert_eq!(store.next_workout_id("FM").await.unwrap(), "YF-FM08");
}

#[tokio::test]
async fn channel_overview_counts_everything() {
    let store = CatalogStore::in_memory().await.unwrap();
    store
        .insert_workout(&new_workout("YF-TC01", "aaaaaaaaaaa"))
        .await
        .unwrap();
    let mut unvetted = new_workout("YF-TC02", "bbbbbbbbbbb");
    unvetted.vetted = false;
    store.insert_workout(&unvetted).await.unwrap();

    let channels = store.channels().await.unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].workout_count, 2);
}
