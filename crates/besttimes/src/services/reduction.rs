use std::collections::HashMap;

use crate::models::best_time::{BestTimeEntry, RelaySatellite};
use crate::models::record::RaceRecord;
use crate::models::style::CategoryKey;

/// Running minima for one category key, split by relay assistance.
#[derive(Debug, Default, Clone)]
struct CategoryBest {
    solo: Option<RaceRecord>,
    relay: Option<RaceRecord>,
}

/// Per-key minima over one swimmer's raw records.
///
/// Keys are remembered in first-seen order so the merged entry list is
/// deterministic for a given input ordering. That ordering is the only
/// tie-break there is: no canonical upstream ordering exists.
#[derive(Debug, Default)]
pub struct CategoryBests {
    by_key: HashMap<CategoryKey, CategoryBest>,
    key_order: Vec<CategoryKey>,
}

impl CategoryBests {
    fn slot_mut(&mut self, key: &CategoryKey) -> &mut CategoryBest {
        if !self.by_key.contains_key(key) {
            self.key_order.push(key.clone());
        }
        self.by_key.entry(key.clone()).or_default()
    }

    pub fn solo(&self, key: &CategoryKey) -> Option<&RaceRecord> {
        self.by_key.get(key).and_then(|best| best.solo.as_ref())
    }

    pub fn relay(&self, key: &CategoryKey) -> Option<&RaceRecord> {
        self.by_key.get(key).and_then(|best| best.relay.as_ref())
    }

    pub fn keys(&self) -> &[CategoryKey] {
        &self.key_order
    }
}

/// Folds raw records into per-key minima.
///
/// Replacement is on strict `<` only, so a tie keeps whichever record
/// came first in input order. Records with a non-positive time are
/// skipped.
pub fn reduce(records: &[RaceRecord]) -> CategoryBests {
    let mut bests = CategoryBests::default();

    for record in records {
        if !record.has_valid_time() {
            continue;
        }

        let key = CategoryKey::of(record);
        let best = bests.slot_mut(&key);
        let slot = if record.is_relay_assisted {
            &mut best.relay
        } else {
            &mut best.solo
        };

        let replace = match slot {
            Some(current) => record.time_seconds < current.time_seconds,
            None => true,
        };
        if replace {
            *slot = Some(record.clone());
        }
    }

    bests
}

/// Emits the final entry list from per-key minima.
///
/// A solo winner carries the relay winner for the same key as a
/// satellite; a key with only a relay winner produces a standalone
/// relay-assisted entry with no satellite. Satellites never cross
/// category keys, so short- and long-course bests stay separate.
pub fn merge(bests: &CategoryBests) -> Vec<BestTimeEntry> {
    let mut entries = Vec::with_capacity(bests.key_order.len());

    for key in &bests.key_order {
        let Some(best) = bests.by_key.get(key) else {
            continue;
        };
        match (&best.solo, &best.relay) {
            (Some(solo), relay) => entries.push(solo_entry(solo, relay.as_ref())),
            (None, Some(relay)) => entries.push(relay_only_entry(relay)),
            (None, None) => {}
        }
    }

    entries
}

/// Reduce-then-merge over one swimmer's records.
pub fn best_times(records: &[RaceRecord]) -> Vec<BestTimeEntry> {
    merge(&reduce(records))
}

fn solo_entry(solo: &RaceRecord, relay: Option<&RaceRecord>) -> BestTimeEntry {
    BestTimeEntry {
        id: solo.id,
        time_seconds: solo.time_seconds,
        recorded_at: solo.recorded_at,
        pool_type: solo.pool_type,
        is_relay_assisted: false,
        style: solo.style(),
        competition: solo.competition(),
        relay_satellite: relay.map(|record| RelaySatellite {
            id: record.id,
            time_seconds: record.time_seconds,
            recorded_at: record.recorded_at,
            competition: record.competition(),
        }),
    }
}

fn relay_only_entry(relay: &RaceRecord) -> BestTimeEntry {
    BestTimeEntry {
        id: relay.id,
        time_seconds: relay.time_seconds,
        recorded_at: relay.recorded_at,
        pool_type: relay.pool_type,
        is_relay_assisted: true,
        style: relay.style(),
        competition: relay.competition(),
        relay_satellite: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{CompetitionField, CompetitionRef, PoolType};
    use crate::models::style::{Style, StyleField, UNKNOWN_STYLE};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn secs(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn record(style_name: &str, pool_type: PoolType, time: &str, relay: bool) -> RaceRecord {
        let distance: i32 = style_name
            .split('m')
            .next()
            .and_then(|d| d.parse().ok())
            .unwrap_or(0);
        RaceRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            time_seconds: secs(time),
            recorded_at: Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap(),
            pool_type,
            is_relay_assisted: relay,
            style: Some(StyleField::One(Style {
                name: style_name.to_string(),
                distance,
            })),
            competition: Some(CompetitionField::One(CompetitionRef {
                title: "City Championships".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
            })),
            note: None,
        }
    }

    fn key(style_name: &str, pool_type: PoolType) -> CategoryKey {
        CategoryKey {
            style_name: style_name.to_string(),
            pool_type,
        }
    }

    #[test]
    fn keeps_strict_minimum_per_key() {
        let records = vec![
            record("50mFreestyle", PoolType::ShortCourse, "31.10", false),
            record("50mFreestyle", PoolType::ShortCourse, "30.50", false),
            record("50mFreestyle", PoolType::ShortCourse, "30.90", false),
        ];

        let bests = reduce(&records);
        let solo = bests
            .solo(&key("50mFreestyle", PoolType::ShortCourse))
            .unwrap();
        assert_eq!(solo.time_seconds, secs("30.50"));
    }

    #[test]
    fn tie_keeps_first_seen_record() {
        let first = record("50mFreestyle", PoolType::ShortCourse, "30.50", false);
        let second = record("50mFreestyle", PoolType::ShortCourse, "30.50", false);
        let first_id = first.id;

        let bests = reduce(&[first, second]);
        let solo = bests
            .solo(&key("50mFreestyle", PoolType::ShortCourse))
            .unwrap();
        assert_eq!(solo.id, first_id);
    }

    #[test]
    fn non_positive_times_are_skipped() {
        let records = vec![
            record("50mFreestyle", PoolType::ShortCourse, "0", false),
            record("50mFreestyle", PoolType::ShortCourse, "-1.5", false),
        ];

        let bests = reduce(&records);
        assert!(bests.keys().is_empty());
        assert!(best_times(&records).is_empty());
    }

    #[test]
    fn solo_and_relay_reduce_separately_under_one_key() {
        let records = vec![
            record("50mFreestyle", PoolType::ShortCourse, "30.50", false),
            record("50mFreestyle", PoolType::ShortCourse, "29.80", true),
            record("50mFreestyle", PoolType::ShortCourse, "29.90", true),
        ];

        let entries = best_times(&records);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.time_seconds, secs("30.50"));
        assert!(!entry.is_relay_assisted);

        let satellite = entry.relay_satellite.as_ref().unwrap();
        assert_eq!(satellite.time_seconds, secs("29.80"));
    }

    #[test]
    fn relay_only_key_produces_standalone_relay_entry() {
        let records = vec![record("100mButterfly", PoolType::LongCourse, "62.40", true)];

        let entries = best_times(&records);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert!(entry.is_relay_assisted);
        assert!(entry.relay_satellite.is_none());
        assert_eq!(entry.time_seconds, secs("62.40"));
    }

    #[test]
    fn pool_types_never_merge() {
        let records = vec![
            record("50mFreestyle", PoolType::ShortCourse, "30.50", false),
            record("50mFreestyle", PoolType::LongCourse, "29.80", true),
        ];

        let entries = best_times(&records);
        assert_eq!(entries.len(), 2);

        let short = entries
            .iter()
            .find(|e| e.pool_type == PoolType::ShortCourse)
            .unwrap();
        assert!(short.relay_satellite.is_none());

        let long = entries
            .iter()
            .find(|e| e.pool_type == PoolType::LongCourse)
            .unwrap();
        assert!(long.is_relay_assisted);
    }

    #[test]
    fn missing_style_groups_under_unknown() {
        let mut orphan = record("50mFreestyle", PoolType::ShortCourse, "40.00", false);
        orphan.style = None;
        let mut other = record("50mFreestyle", PoolType::ShortCourse, "41.00", false);
        other.style = None;

        let entries = best_times(&[orphan, other]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].style.name, UNKNOWN_STYLE);
        assert_eq!(entries[0].style.distance, 0);
        assert_eq!(entries[0].time_seconds, secs("40.00"));
    }

    #[test]
    fn entries_follow_first_seen_category_order() {
        let records = vec![
            record("100mBackstroke", PoolType::ShortCourse, "70.00", false),
            record("50mFreestyle", PoolType::ShortCourse, "30.50", false),
            record("100mBackstroke", PoolType::ShortCourse, "69.00", false),
        ];

        let entries = best_times(&records);
        let names: Vec<&str> = entries.iter().map(|e| e.style.name.as_str()).collect();
        assert_eq!(names, vec!["100mBackstroke", "50mFreestyle"]);
    }
}
