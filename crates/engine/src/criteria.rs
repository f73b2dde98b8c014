//! Recommendation request criteria and their translation to catalog
//! filters.
//!
//! Caller-supplied filters are sanitized permissively: blank strings and
//! unparseable values are treated as absent rather than rejected, so a
//! malformed query degrades to a broader recommendation instead of an
//! error.

use catalog::{Category, Equipment, Intensity, WorkoutFilter};
use serde::Deserialize;

/// Sanitized criteria for one recommendation request.
#[derive(Debug, Clone, Default)]
pub struct RecommendCriteria {
    /// Requested muscle group; matches primary target or either tag and
    /// feeds the scoring bonus
    pub target: Option<String>,
    /// Extra tag constraint, matched against the tags only
    pub special_tag: Option<String>,
    /// Restrict to these channels (empty = no restriction)
    pub channels: Vec<String>,
    pub duration_min: Option<i64>,
    pub duration_max: Option<i64>,
    pub intensity: Option<Intensity>,
    pub equipment: Option<Equipment>,
    /// Yoga mode: restrict to the yoga category and skip every other
    /// optional filter except duration-agnostic hard filters. Yoga
    /// content is not tagged with muscle-group granularity, so the
    /// finer filters would only produce empty results.
    pub yoga: bool,
}

/// Raw query input as it arrives over the wire: everything optional,
/// everything a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecommendQuery {
    pub target: Option<String>,
    pub special_tag: Option<String>,
    /// Comma-separated channel names
    pub channels: Option<String>,
    pub duration_min: Option<String>,
    pub duration_max: Option<String>,
    pub intensity: Option<String>,
    pub equipment: Option<String>,
    pub yoga: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl RecommendCriteria {
    /// Build sanitized criteria from raw query input. Never fails:
    /// anything unparseable is dropped.
    pub fn from_raw(raw: &RawRecommendQuery) -> Self {
        let yoga = matches!(raw.yoga.as_deref(), Some("true") | Some("1"));
        Self {
            target: non_blank(&raw.target),
            special_tag: non_blank(&raw.special_tag),
            channels: non_blank(&raw.channels)
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            duration_min: non_blank(&raw.duration_min).and_then(|s| s.parse().ok()),
            duration_max: non_blank(&raw.duration_max).and_then(|s| s.parse().ok()),
            intensity: non_blank(&raw.intensity).and_then(|s| s.parse().ok()),
            equipment: non_blank(&raw.equipment).and_then(|s| s.parse().ok()),
            yoga,
        }
    }

    /// Translate the criteria into the catalog query for eligible
    /// candidates.
    ///
    /// Hard filters always apply: vetted, not do-not-recommend, link ok.
    /// In yoga mode the category switches to `yoga` and every optional
    /// filter is skipped; otherwise the category is exactly `workout`
    /// and the optional filters apply when present.
    pub fn to_filter(&self) -> WorkoutFilter {
        let mut filter = WorkoutFilter::recommendable();
        if self.yoga {
            filter.category = Some(Category::Yoga);
            return filter;
        }
        filter.category = Some(Category::Workout);
        filter.target = self.target.clone();
        filter.special_tag = self.special_tag.clone();
        filter.channels = self.channels.clone();
        filter.min_duration = self.duration_min;
        filter.max_duration = self.duration_max;
        filter.intensity = self.intensity;
        filter.equipment = self.equipment;
        filter
    }
}
