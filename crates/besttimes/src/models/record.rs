use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::style::{Style, StyleField};

/// Pool classification of a race: short course (25m) or long course (50m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolType {
    ShortCourse,
    LongCourse,
}

impl PoolType {
    /// Maps the upstream integer code (0 = short course, 1 = long course).
    /// Missing or unrecognized codes fall back to short course.
    pub fn from_code(code: Option<i16>) -> Self {
        match code {
            Some(1) => PoolType::LongCourse,
            _ => PoolType::ShortCourse,
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            PoolType::ShortCourse => 0,
            PoolType::LongCourse => 1,
        }
    }
}

/// Competition provenance of a record. Records created through bulk
/// import carry no competition reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRef {
    pub title: String,
    pub date: NaiveDate,
}

/// Join shape of the competition attribute: a to-one relation the
/// upstream query layer may deliver as a single object or a one-element
/// array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompetitionField {
    One(CompetitionRef),
    Many(Vec<CompetitionRef>),
}

/// A raw race time as supplied by the record repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub time_seconds: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub pool_type: PoolType,
    pub is_relay_assisted: bool,
    pub style: Option<StyleField>,
    pub competition: Option<CompetitionField>,
    pub note: Option<String>,
}

impl RaceRecord {
    /// Normalized style for this record. Missing style metadata maps to
    /// the `"Unknown"` fallback; array-shaped joins take their first
    /// element.
    pub fn style(&self) -> Style {
        Style::normalize(self.style.as_ref())
    }

    pub fn competition(&self) -> Option<CompetitionRef> {
        match self.competition.as_ref()? {
            CompetitionField::One(competition) => Some(competition.clone()),
            CompetitionField::Many(competitions) => competitions.first().cloned(),
        }
    }

    /// Times must be positive to count. Zero or negative values are
    /// invalid input and skipped by the reducer rather than rejected.
    pub fn has_valid_time(&self) -> bool {
        self.time_seconds > Decimal::ZERO
    }
}
