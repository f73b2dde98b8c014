//! Field normalization for spreadsheet exports.
//!
//! The source spreadsheets are hand-maintained, so every field arrives
//! in whatever shape the author typed that day. Normalization is
//! permissive: unrecognized values fall back to a sensible default
//! rather than failing the row.

use catalog::{Category, Equipment, Intensity, LinkStatus};
use chrono::NaiveDate;

/// Pull an eleven-character YouTube video id out of a watch URL, a
/// short link, an embed URL, or a bare id.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let is_video_id =
        |s: &str| s.len() == 11 && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if is_video_id(raw) {
        return Some(raw.to_string());
    }
    for marker in ["watch?v=", "youtu.be/", "embed/"] {
        if let Some(pos) = raw.find(marker) {
            let tail = &raw[pos + marker.len()..];
            let id: String = tail
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .take(11)
                .collect();
            if is_video_id(&id) {
                return Some(id);
            }
        }
    }
    None
}

/// Channel code embedded in a workout id, e.g. `YF-FM04` carries `FM`.
pub fn extract_channel_code(workout_id: &str) -> Option<String> {
    let rest = workout_id.strip_prefix("YF-")?;
    let code: String = rest.chars().take_while(|c| c.is_ascii_uppercase()).collect();
    if code.is_empty() { None } else { Some(code) }
}

/// Fallback channel code from a channel URL handle (`/@YogaWithX`).
pub fn channel_code_from_url(channel_url: &str) -> Option<String> {
    let handle = channel_url.split('@').nth(1)?;
    let code: String = handle
        .chars()
        .take_while(|c| *c != '/')
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(2)
        .collect();
    if code.is_empty() { None } else { Some(code) }
}

pub fn normalize_category(raw: &str) -> Category {
    match raw.trim().to_lowercase().as_str() {
        "yoga" => Category::Yoga,
        "warmup" => Category::Warmup,
        "cooldown" => Category::Cooldown,
        _ => Category::Workout,
    }
}

pub fn normalize_intensity(raw: &str) -> Intensity {
    match raw.trim().to_lowercase().as_str() {
        "low" => Intensity::Low,
        "high" => Intensity::High,
        _ => Intensity::Medium,
    }
}

pub fn normalize_equipment(raw: &str) -> Equipment {
    match raw.trim().to_lowercase().as_str() {
        "" | "none" | "mat" => Equipment::None,
        "bands" => Equipment::Bands,
        "dumbbells" => Equipment::Dumbbells,
        _ => Equipment::Other,
    }
}

pub fn normalize_link_status(raw: &str) -> LinkStatus {
    match raw.trim().to_lowercase().as_str() {
        "suspected" => LinkStatus::Suspected,
        "dead" => LinkStatus::Dead,
        "private" => LinkStatus::Private,
        _ => LinkStatus::Ok,
    }
}

/// Spreadsheet booleans are `Y`/`N` cells, often blank.
pub fn normalize_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("y")
}

/// Ratings outside 1 through 4 are treated as unrated.
pub fn parse_rating(raw: &str) -> Option<i64> {
    let n: i64 = raw.trim().parse().ok()?;
    (1..=4).contains(&n).then_some(n)
}

/// Accepts ISO dates and the spreadsheet's `M/D/YY` style.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = raw.parse() {
        return Some(date);
    }
    let parts: Vec<&str> = raw.split('/').collect();
    if let [month, day, year] = parts[..] {
        let year: i32 = year.parse().ok()?;
        let year = if year < 100 { 2000 + year } else { year };
        return NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?);
    }
    None
}

/// Keyword heuristic for content uploaded before the category column
/// carried `yoga`. Matches on the title or a known instructor channel.
pub fn is_yoga_content(title: &str, channel_name: &str) -> bool {
    let title = title.to_lowercase();
    let channel = channel_name.to_lowercase();
    title.contains("yoga")
        || channel.contains("yoga")
        || channel.contains("adriene")
        || channel.contains("nancy")
}
