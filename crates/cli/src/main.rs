use anyhow::{Context, Result};
use catalog::{CatalogStore, HistoryQuery, NewHistoryEntry, Workout};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{RecommendCriteria, RecommendationEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// FitRecs - workout recommendation engine
#[derive(Parser)]
#[command(name = "fitrecs")]
#[command(about = "Pick today's workout from your video catalog", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, default_value = "fitrecs.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a spreadsheet export into the catalog
    Import {
        /// CSV file to import
        file: PathBuf,

        /// Treat the file as a history export instead of workouts
        #[arg(long)]
        history: bool,
    },

    /// Recommend a workout for today
    Recommend {
        /// Muscle group to focus on
        #[arg(long)]
        target: Option<String>,

        /// Extra tag the workout must carry
        #[arg(long)]
        special_tag: Option<String>,

        /// Restrict to these channels (comma-separated)
        #[arg(long)]
        channels: Option<String>,

        /// Minimum duration in minutes
        #[arg(long)]
        duration_min: Option<i64>,

        /// Maximum duration in minutes
        #[arg(long)]
        duration_max: Option<i64>,

        /// Intensity: low, medium or high
        #[arg(long)]
        intensity: Option<String>,

        /// Equipment: none, bands, dumbbells or other
        #[arg(long)]
        equipment: Option<String>,

        /// Recommend a yoga session instead of a workout
        #[arg(long)]
        yoga: bool,

        /// Seed the random selection for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Log a completed session
    Log {
        /// Workout id, e.g. YF-HB01
        workout_id: String,

        /// Session date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Warmup done before the workout
        #[arg(long)]
        warmup: Option<String>,

        /// Cooldown done after the workout
        #[arg(long)]
        cooldown: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show recent sessions
    History {
        /// Number of sessions to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let db = cli.db.to_string_lossy();
    let store = CatalogStore::open(&db)
        .await
        .with_context(|| format!("failed to open database at {db}"))?;

    match cli.command {
        Commands::Import { file, history } => handle_import(&store, file, history).await?,
        Commands::Recommend {
            target,
            special_tag,
            channels,
            duration_min,
            duration_max,
            intensity,
            equipment,
            yoga,
            seed,
        } => {
            let criteria = RecommendCriteria {
                target,
                special_tag,
                channels: channels
                    .map(|list| {
                        list.split(',')
                            .map(str::trim)
                            .filter(|c| !c.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
                duration_min,
                duration_max,
                intensity: intensity
                    .map(|i| i.parse().context("invalid intensity"))
                    .transpose()?,
                equipment: equipment
                    .map(|e| e.parse().context("invalid equipment"))
                    .transpose()?,
                yoga,
            };
            handle_recommend(store, criteria, seed).await?;
        }
        Commands::Log {
            workout_id,
            date,
            warmup,
            cooldown,
            notes,
        } => handle_log(&store, workout_id, date, warmup, cooldown, notes).await?,
        Commands::History { limit } => handle_history(&store, limit).await?,
    }

    Ok(())
}

async fn handle_import(store: &CatalogStore, file: PathBuf, history: bool) -> Result<()> {
    let summary = if history {
        importer::import_history_file(store, &file).await?
    } else {
        importer::import_workouts_file(store, &file).await?
    };

    println!(
        "{} Imported {} rows, skipped {}",
        "✓".green(),
        summary.imported,
        summary.skipped
    );
    for error in &summary.errors {
        println!("{} {error}", "!".yellow());
    }
    Ok(())
}

async fn handle_recommend(
    store: CatalogStore,
    criteria: RecommendCriteria,
    seed: Option<u64>,
) -> Result<()> {
    let engine = RecommendationEngine::new(store);
    let today = Local::now().date_naive();

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let rec = engine.recommend(&criteria, today, &mut rng).await?;

    println!("{}", "Today's pick".bold().blue());
    print_workout(&rec.workout, "→");
    if let Some(warmup) = &rec.warmup {
        println!("{}", "Warmup".bold());
        print_workout(warmup, "•");
    }
    if let Some(cooldown) = &rec.cooldown {
        println!("{}", "Cooldown".bold());
        print_workout(cooldown, "•");
    }
    Ok(())
}

fn print_workout(workout: &Workout, bullet: &str) {
    println!(
        "  {} {} ({} min, {:?}, {})",
        bullet.green(),
        workout.title.bold(),
        workout.duration_min,
        workout.intensity,
        workout.primary_target
    );
    println!("    {} | {}", workout.channel_name, workout.video_url.dimmed());
}

async fn handle_log(
    store: &CatalogStore,
    workout_id: String,
    date: Option<NaiveDate>,
    warmup: Option<String>,
    cooldown: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let entry = NewHistoryEntry {
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        workout_id,
        warmup_id: warmup,
        cooldown_id: cooldown,
        notes,
    };
    let logged = store.log_session(&entry).await?;
    println!(
        "{} Logged {} on {}",
        "✓".green(),
        logged.workout_id.bold(),
        logged.date
    );
    Ok(())
}

async fn handle_history(store: &CatalogStore, limit: usize) -> Result<()> {
    let sessions = store.history(&HistoryQuery::default()).await?;
    if sessions.is_empty() {
        println!("No sessions logged yet.");
        return Ok(());
    }

    for session in sessions.iter().take(limit) {
        let title = session.workout_title.as_deref().unwrap_or("(deleted)");
        println!(
            "{} {} {}",
            session.date.to_string().cyan(),
            session.workout_id.bold(),
            title
        );
        if let Some(notes) = &session.notes {
            println!("    {}", notes.dimmed());
        }
    }
    Ok(())
}
