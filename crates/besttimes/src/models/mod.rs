pub mod best_time;
pub mod member;
pub mod record;
pub mod style;

pub use best_time::{BestTimeEntry, CourseTab, MemberBestTimeStore, RelaySatellite};
pub use member::Member;
pub use record::{CompetitionField, CompetitionRef, PoolType, RaceRecord};
pub use style::{CategoryKey, Stroke, Style, StyleField};
