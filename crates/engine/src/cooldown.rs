//! Repeat-cooldown exclusion.

use chrono::NaiveDate;

/// The date on or after which a completion keeps the workout excluded,
/// or `None` when the workout has no cooldown configured.
///
/// The boundary is inclusive on the store side (`date >= cutoff`): a
/// workout with a 5-day cooldown completed exactly 5 days ago is still
/// excluded today.
pub fn cooldown_cutoff(today: NaiveDate, repeat_cooldown_days: i64) -> Option<NaiveDate> {
    if repeat_cooldown_days <= 0 {
        return None;
    }
    Some(today - chrono::Duration::days(repeat_cooldown_days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn cutoff_is_n_days_back() {
        let cutoff = cooldown_cutoff(date("2026-08-30"), 5).unwrap();
        assert_eq!(cutoff, date("2026-08-25"));
    }

    #[test]
    fn zero_or_negative_disables_the_cooldown() {
        assert_eq!(cooldown_cutoff(date("2026-08-30"), 0), None);
        assert_eq!(cooldown_cutoff(date("2026-08-30"), -3), None);
    }
}
