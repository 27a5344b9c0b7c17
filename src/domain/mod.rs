// Domain layer - Chart data types and invariants
pub mod chart_data_set;
pub mod data_point;
pub mod error;
pub mod geometry;
pub mod granularity;
pub mod insight;
