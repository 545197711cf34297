//! Best-time aggregation and ranking engine for a swim-team roster.
//!
//! Raw race records are fetched per member through [`RecordRepository`],
//! folded into per-category best times (with relay-assisted bests kept
//! as secondary candidates), and published as an immutable
//! [`MemberBestTimeStore`] snapshot. Ranking, sorting, and freshness
//! classification are pure functions over that snapshot; nothing here
//! persists or renders.

pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{EngineError, Result};
pub use models::best_time::{
    BestTimeEntry, CourseTab, MemberBestTimeStore, RelaySatellite, filter_by_course,
};
pub use models::member::Member;
pub use models::record::{CompetitionRef, PoolType, RaceRecord};
pub use models::style::{
    CategoryKey, DISTANCES, Stroke, Style, distances_for, is_invalid_combination, style_name,
};
pub use repository::RecordRepository;
pub use services::aggregation::load_all;
pub use services::freshness::{FRESHNESS_WINDOW_DAYS, is_newly_achieved};
pub use services::ranking::{CategorySelector, best_time_for_member};
pub use services::reduction::best_times;
pub use services::sorting::{SortKey, SortOrder, SortState, sort_members};
