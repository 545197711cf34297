use chrono::{DateTime, Utc};

use crate::models::best_time::BestTimeEntry;

/// Lookback window for flagging a best time as newly achieved.
pub const FRESHNESS_WINDOW_DAYS: i64 = 30;

/// Whether an entry should carry the "new" highlight: achieved within
/// the last 30 days *and* backed by a competition. Bulk-imported times
/// have no competition reference and are never flagged, regardless of
/// age. The comparison truncates to whole days.
pub fn is_newly_achieved(entry: &BestTimeEntry, now: DateTime<Utc>) -> bool {
    entry.competition.is_some()
        && now.signed_duration_since(entry.recorded_at).num_days() <= FRESHNESS_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{CompetitionRef, PoolType};
    use crate::models::style::Style;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn entry(recorded_at: DateTime<Utc>, with_competition: bool) -> BestTimeEntry {
        BestTimeEntry {
            id: Uuid::new_v4(),
            time_seconds: Decimal::new(3050, 2),
            recorded_at,
            pool_type: PoolType::ShortCourse,
            is_relay_assisted: false,
            style: Style {
                name: "50mFreestyle".to_string(),
                distance: 50,
            },
            competition: with_competition.then(|| CompetitionRef {
                title: "Spring Meet".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            }),
            relay_satellite: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn recent_competition_entry_is_new() {
        let entry = entry(now() - Duration::days(10), true);
        assert!(is_newly_achieved(&entry, now()));
    }

    #[test]
    fn window_boundary_is_inclusive_at_30_days() {
        assert!(is_newly_achieved(&entry(now() - Duration::days(30), true), now()));
        assert!(!is_newly_achieved(&entry(now() - Duration::days(31), true), now()));
    }

    #[test]
    fn bulk_imported_entry_is_never_new() {
        let fresh_but_unattributed = entry(now() - Duration::days(1), false);
        assert!(!is_newly_achieved(&fresh_but_unattributed, now()));
    }

    #[test]
    fn future_dated_entry_counts_as_new_with_provenance() {
        let entry = entry(now() + Duration::days(2), true);
        assert!(is_newly_achieved(&entry, now()));
    }
}
