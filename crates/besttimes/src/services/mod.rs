pub mod aggregation;
pub mod freshness;
pub mod ranking;
pub mod reduction;
pub mod sorting;
pub mod timefmt;
