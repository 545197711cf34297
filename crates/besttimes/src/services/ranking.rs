use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::best_time::{BestTimeEntry, MemberBestTimeStore, RelaySatellite};
use crate::models::record::PoolType;
use crate::models::style;

/// The category a caller is asking about, plus whether relay-assisted
/// times may win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySelector {
    pub stroke_label: String,
    pub distance: i32,
    pub include_relay: bool,
}

impl CategorySelector {
    pub fn new(stroke_label: impl Into<String>, distance: i32, include_relay: bool) -> Self {
        Self {
            stroke_label: stroke_label.into(),
            distance,
            include_relay,
        }
    }

    /// Exact-match lookup key. This is a plain string comparison against
    /// stored style names; a caller formatting the distance differently
    /// silently gets no data back.
    pub fn style_name(&self) -> String {
        style::style_name(self.distance, &self.stroke_label)
    }
}

/// Single best applicable entry for one member in one category, ranked
/// across both pool types (short course scanned first).
///
/// Non-relay bests always compete. With `include_relay`, each relay
/// satellite joins as an independent candidate carrying the satellite's
/// own time, date, and competition under the parent's style and pool
/// type, and relay-only entries become eligible at all. The winner has
/// the strictly smallest time; on a tie the first candidate seen wins.
/// Returns `None` when nothing matches.
pub fn best_time_for_member(
    store: &MemberBestTimeStore,
    member_id: Uuid,
    selector: &CategorySelector,
) -> Option<BestTimeEntry> {
    let style_name = selector.style_name();
    let entries = store.entries_for(member_id);

    let mut candidates = Vec::new();
    for pool_type in [PoolType::ShortCourse, PoolType::LongCourse] {
        for entry in entries
            .iter()
            .filter(|entry| entry.style.name == style_name && entry.pool_type == pool_type)
        {
            if entry.is_relay_assisted {
                if selector.include_relay {
                    candidates.push(entry.clone());
                }
                continue;
            }

            candidates.push(entry.clone());
            if selector.include_relay
                && let Some(satellite) = &entry.relay_satellite
            {
                candidates.push(satellite_candidate(entry, satellite));
            }
        }
    }

    candidates.into_iter().reduce(|best, candidate| {
        if candidate.time_seconds < best.time_seconds {
            candidate
        } else {
            best
        }
    })
}

fn satellite_candidate(parent: &BestTimeEntry, satellite: &RelaySatellite) -> BestTimeEntry {
    BestTimeEntry {
        id: satellite.id,
        time_seconds: satellite.time_seconds,
        recorded_at: satellite.recorded_at,
        pool_type: parent.pool_type,
        is_relay_assisted: true,
        style: parent.style.clone(),
        competition: satellite.competition.clone(),
        relay_satellite: None,
    }
}
