use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::record::{CompetitionRef, PoolType};
use crate::models::style::Style;

/// The fastest relay-assisted record sharing a best time's category key,
/// attached to the solo best as a secondary candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaySatellite {
    pub id: Uuid,
    pub time_seconds: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub competition: Option<CompetitionRef>,
}

/// The best recorded time for one category key of one swimmer.
///
/// Normally built from the fastest solo record, with the fastest
/// relay-assisted record for the same key attached as a satellite. When
/// a key has only relay-assisted records the entry itself is
/// relay-assisted and carries no satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTimeEntry {
    pub id: Uuid,
    pub time_seconds: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub pool_type: PoolType,
    pub is_relay_assisted: bool,
    pub style: Style,
    pub competition: Option<CompetitionRef>,
    pub relay_satellite: Option<RelaySatellite>,
}

/// Course filter for a member's entry list (the ALL / short / long tabs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseTab {
    All,
    ShortCourse,
    LongCourse,
}

pub fn filter_by_course(entries: &[BestTimeEntry], tab: CourseTab) -> Vec<&BestTimeEntry> {
    entries
        .iter()
        .filter(|entry| match tab {
            CourseTab::All => true,
            CourseTab::ShortCourse => entry.pool_type == PoolType::ShortCourse,
            CourseTab::LongCourse => entry.pool_type == PoolType::LongCourse,
        })
        .collect()
}

/// Snapshot of every roster member's best times, keyed by membership id.
///
/// Built in one step after aggregation and treated as immutable once
/// published; readers never race the aggregator. A member whose load
/// failed is present with an empty list, indistinguishable from a
/// member with no records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberBestTimeStore {
    entries: HashMap<Uuid, Vec<BestTimeEntry>>,
}

impl MemberBestTimeStore {
    /// Entries for one member; an empty slice for unknown members.
    pub fn entries_for(&self, member_id: Uuid) -> &[BestTimeEntry] {
        self.entries
            .get(&member_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Uuid, Vec<BestTimeEntry>)> for MemberBestTimeStore {
    fn from_iter<I: IntoIterator<Item = (Uuid, Vec<BestTimeEntry>)>>(iter: I) -> Self {
        MemberBestTimeStore {
            entries: iter.into_iter().collect(),
        }
    }
}
