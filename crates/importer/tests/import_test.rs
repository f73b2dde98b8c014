//! End-to-end import tests against an in-memory store.

use catalog::{CatalogStore, Category, Equipment, HistoryQuery, LinkStatus};
use importer::{import_history, import_workouts};

const WORKOUTS_HEADER: &str = "Workout_ID,YT_ID,Workout_Title,YT_Title,Uploader_Name,Channel_URL,Video_URL,Type,Primary_Target,Target_Tag1,Target_Tag2,Intensity,Duration_Min,Equipment,Vetted,Do_Not_Recommend,Rating,Repeat_Cooldown_Days,Link_Status,Last_Checked";

fn workouts_csv(rows: &[&str]) -> String {
    let mut csv = WORKOUTS_HEADER.to_string();
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv
}

async fn store() -> CatalogStore {
    CatalogStore::in_memory().await.unwrap()
}

#[tokio::test]
async fn imports_a_clean_row() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-HB01,abcdefghij1,Leg Day,,Heather,https://youtube.com/@heather,https://www.youtube.com/watch?v=abcdefghij1,Workout,Legs,Glutes,,High,30,Dumbbells,Y,N,3,7,ok,3/7/25",
    ]);

    let summary = import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 0);
    assert!(summary.errors.is_empty());

    let workout = store.get_workout("YF-HB01").await.unwrap();
    assert_eq!(workout.video_id, "abcdefghij1");
    assert_eq!(workout.channel_code.as_deref(), Some("HB"));
    assert_eq!(workout.category, Category::Workout);
    assert_eq!(workout.equipment, Equipment::Dumbbells);
    assert!(workout.vetted);
    assert_eq!(workout.rating, Some(3));
    assert_eq!(workout.repeat_cooldown_days, 7);
    assert_eq!(workout.last_checked.unwrap().to_string(), "2025-03-07");
}

#[tokio::test]
async fn duplicate_videos_are_skipped_silently() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-HB01,abcdefghij1,Leg Day,,Heather,,https://www.youtube.com/watch?v=abcdefghij1,Workout,Legs,,,High,30,None,Y,N,,,ok,",
        "YF-HB02,abcdefghij1,Leg Day Again,,Heather,,https://www.youtube.com/watch?v=abcdefghij1,Workout,Legs,,,High,30,None,Y,N,,,ok,",
    ]);

    let summary = import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.errors.is_empty());
}

#[tokio::test]
async fn taken_ids_get_regenerated() {
    let store = store().await;
    let first = workouts_csv(&[
        "YF-HB01,abcdefghij1,Leg Day,,Heather,,,Workout,Legs,,,High,30,None,Y,N,,,ok,",
    ]);
    import_workouts(&store, first.as_bytes()).await.unwrap();

    // Same spreadsheet id, different video: must land under a new id.
    let second = workouts_csv(&[
        "YF-HB01,abcdefghij2,Arm Day,,Heather,,,Workout,Arms,,,High,30,None,Y,N,,,ok,",
    ]);
    let summary = import_workouts(&store, second.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 1);

    let workout = store.get_workout("YF-HB02").await.unwrap();
    assert_eq!(workout.video_id, "abcdefghij2");
}

#[tokio::test]
async fn missing_id_is_generated_from_channel_url() {
    let store = store().await;
    let csv = workouts_csv(&[
        ",abcdefghij1,Core Blast,,MadFit,https://www.youtube.com/@madfit,,Workout,Core,,,Medium,15,None,Y,N,,,ok,",
    ]);

    let summary = import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 1);
    let workout = store.get_workout("YF-MA01").await.unwrap();
    assert_eq!(workout.title, "Core Blast");
}

#[tokio::test]
async fn rows_without_any_video_id_are_rejected() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-HB01,,No Video Here,,Heather,,https://example.com/clip,Workout,Legs,,,High,30,None,Y,N,,,ok,",
    ]);

    let summary = import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors.len(), 1);
}

#[tokio::test]
async fn dirty_fields_fall_back_to_defaults() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-XX01,abcdefghij1,,Mystery Session,,,https://youtu.be/abcdefghij1,stretching,,,,brutal,not-a-number,kettlebell,maybe,N,9,,gone,someday",
    ]);

    let summary = import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 1);

    let workout = store.get_workout("YF-XX01").await.unwrap();
    assert_eq!(workout.title, "Mystery Session");
    assert_eq!(workout.channel_name, "Unknown");
    assert_eq!(workout.category, Category::Workout);
    assert_eq!(workout.duration_min, 0);
    assert_eq!(workout.equipment, Equipment::Other);
    assert!(!workout.vetted);
    assert_eq!(workout.rating, None);
    assert_eq!(workout.repeat_cooldown_days, 5);
    assert_eq!(workout.link_status, LinkStatus::Ok);
    assert_eq!(workout.last_checked, None);
}

#[tokio::test]
async fn legacy_yoga_uploads_are_classified_at_ingestion() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-YA01,abcdefghij1,Morning Flow,,Yoga With Adriene,,,Workout,Full Body,,,Low,20,None,Y,N,,,ok,",
        "YF-YA02,abcdefghij2,Yoga For Runners,,Some Channel,,,Workout,Full Body,,,Low,20,None,Y,N,,,ok,",
        "YF-HB01,abcdefghij3,HIIT Blast,,Heather,,,Workout,Full Body,,,High,20,None,Y,N,,,ok,",
    ]);

    import_workouts(&store, csv.as_bytes()).await.unwrap();
    assert_eq!(
        store.get_workout("YF-YA01").await.unwrap().category,
        Category::Yoga
    );
    assert_eq!(
        store.get_workout("YF-YA02").await.unwrap().category,
        Category::Yoga
    );
    assert_eq!(
        store.get_workout("YF-HB01").await.unwrap().category,
        Category::Workout
    );
}

#[tokio::test]
async fn history_rows_require_known_workouts() {
    let store = store().await;
    let csv = workouts_csv(&[
        "YF-HB01,abcdefghij1,Leg Day,,Heather,,,Workout,Legs,,,High,30,None,Y,N,,,ok,",
    ]);
    import_workouts(&store, csv.as_bytes()).await.unwrap();

    let history = "Date,Workout_ID,Warmup_ID,Cooldown_ID,Notes\n\
                   2025-03-07,YF-HB01,,,felt great\n\
                   3/8/25,YF-HB01,,,\n\
                   2025-03-09,YF-ZZ99,,,\n\
                   not-a-date,YF-HB01,,,";
    let summary = import_history(&store, history.as_bytes()).await.unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors.len(), 2);

    let sessions = store.history(&HistoryQuery::default()).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].date.to_string(), "2025-03-08");
    assert_eq!(sessions[1].notes.as_deref(), Some("felt great"));
}
