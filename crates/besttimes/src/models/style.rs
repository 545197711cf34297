use serde::{Deserialize, Serialize};

use crate::models::record::{PoolType, RaceRecord};

/// Fallback style name for records whose style metadata is missing.
/// Lookup keys are built by string concatenation of distance and stroke,
/// so the fallback simply never matches a real category.
pub const UNKNOWN_STYLE: &str = "Unknown";

/// A swim category: canonical style name (distance + stroke, e.g.
/// `"50mFreestyle"`) and the distance in meters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub distance: i32,
}

impl Style {
    pub fn unknown() -> Self {
        Style {
            name: UNKNOWN_STYLE.to_string(),
            distance: 0,
        }
    }

    /// Collapses the raw join shape into a single style.
    ///
    /// `None` and empty arrays fall back to `"Unknown"`/0; a present
    /// style with an empty name gets the same name fallback. Arrays take
    /// their first element; upstream ordering of that array is
    /// unspecified.
    pub fn normalize(raw: Option<&StyleField>) -> Style {
        let style = match raw {
            None => return Style::unknown(),
            Some(StyleField::One(style)) => style,
            Some(StyleField::Many(styles)) => match styles.first() {
                Some(style) => style,
                None => return Style::unknown(),
            },
        };

        if style.name.is_empty() {
            Style {
                name: UNKNOWN_STYLE.to_string(),
                distance: style.distance,
            }
        } else {
            style.clone()
        }
    }
}

/// Join shape of the style attribute: a to-one relation the upstream
/// query layer may deliver as a single object or a one-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleField {
    One(Style),
    Many(Vec<Style>),
}

/// Grouping key for best-time selection: one best time is tracked per
/// (style, pool type) pair, with relay-assisted times reduced separately
/// under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryKey {
    pub style_name: String,
    pub pool_type: PoolType,
}

impl CategoryKey {
    pub fn of(record: &RaceRecord) -> Self {
        CategoryKey {
            style_name: record.style().name,
            pool_type: record.pool_type,
        }
    }
}

/// Strokes in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    Freestyle,
    Breaststroke,
    Backstroke,
    Butterfly,
    IndividualMedley,
}

impl Stroke {
    pub const ALL: [Stroke; 5] = [
        Stroke::Freestyle,
        Stroke::Breaststroke,
        Stroke::Backstroke,
        Stroke::Butterfly,
        Stroke::IndividualMedley,
    ];

    /// Canonical stroke label used inside style names.
    pub fn label(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "Freestyle",
            Stroke::Breaststroke => "Breaststroke",
            Stroke::Backstroke => "Backstroke",
            Stroke::Butterfly => "Butterfly",
            Stroke::IndividualMedley => "IndividualMedley",
        }
    }
}

/// Distances offered by the category tables, in meters.
pub const DISTANCES: [i32; 5] = [50, 100, 200, 400, 800];

/// Combinations that do not exist as raced events.
pub fn is_invalid_combination(stroke: Stroke, distance: i32) -> bool {
    match stroke {
        Stroke::IndividualMedley => distance == 50 || distance == 800,
        Stroke::Breaststroke | Stroke::Backstroke | Stroke::Butterfly => {
            distance == 400 || distance == 800
        }
        Stroke::Freestyle => false,
    }
}

/// Valid distances for one stroke, in table order.
pub fn distances_for(stroke: Stroke) -> Vec<i32> {
    DISTANCES
        .iter()
        .copied()
        .filter(|distance| !is_invalid_combination(stroke, *distance))
        .collect()
}

/// Canonical style name: plain concatenation of distance and stroke
/// label. Lookups elsewhere compare this string exactly; formatting
/// drift between producer and consumer yields no data, not an error.
pub fn style_name(distance: i32, stroke_label: &str) -> String {
    format!("{distance}m{stroke_label}")
}
