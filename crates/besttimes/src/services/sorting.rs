use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::member::Member;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The column a sort is keyed on: one stroke at one distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub stroke_label: String,
    pub distance: i32,
}

/// Header-toggle state for the roster table.
///
/// Selecting a new column sorts it ascending; selecting the active
/// column again clears the sort and restores original roster order.
/// There is no ascending-to-descending cycle: `Desc` is honored by
/// [`sort_members`] and reachable through [`SortState::sorted_by`], but
/// the toggle itself never produces it. Whether a descending toggle was
/// ever intended is unconfirmed, so the state is kept rather than
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    active: Option<(SortKey, SortOrder)>,
}

impl SortState {
    /// State with a sort already active, the only way to start out
    /// descending.
    pub fn sorted_by(stroke_label: &str, distance: i32, order: SortOrder) -> Self {
        SortState {
            active: Some((
                SortKey {
                    stroke_label: stroke_label.to_string(),
                    distance,
                },
                order,
            )),
        }
    }

    pub fn toggle(&mut self, stroke_label: &str, distance: i32) {
        let key = SortKey {
            stroke_label: stroke_label.to_string(),
            distance,
        };
        match &self.active {
            Some((active, _)) if *active == key => self.active = None,
            _ => self.active = Some((key, SortOrder::Asc)),
        }
    }

    pub fn is_active(&self, stroke_label: &str, distance: i32) -> bool {
        self.active.as_ref().is_some_and(|(key, _)| {
            key.stroke_label == stroke_label && key.distance == distance
        })
    }

    pub fn active_key(&self) -> Option<&SortKey> {
        self.active.as_ref().map(|(key, _)| key)
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.active.as_ref().map(|(_, order)| *order)
    }

    /// Roster in display order: sorted when a column is active,
    /// untouched otherwise.
    pub fn apply<F>(&self, members: &[Member], best_time: F) -> Vec<Member>
    where
        F: Fn(&Member, &SortKey) -> Option<Decimal>,
    {
        match &self.active {
            Some((key, order)) => sort_members(members, *order, |member| best_time(member, key)),
            None => members.to_vec(),
        }
    }
}

/// Stable sort of the roster by looked-up best time.
///
/// Members without a time for the active category land after every
/// ranked member in both directions; that contract is deliberate.
/// Ranked ties and time-less members keep their original roster order.
pub fn sort_members<F>(members: &[Member], order: SortOrder, best_time: F) -> Vec<Member>
where
    F: Fn(&Member) -> Option<Decimal>,
{
    let mut keyed: Vec<(Option<Decimal>, &Member)> = members
        .iter()
        .map(|member| (best_time(member), member))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        },
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    keyed.into_iter().map(|(_, member)| member.clone()).collect()
}
