// Application layer - Chart preparation use cases
pub mod annotations;
pub mod chart_service;
pub mod chart_store;
pub mod formatting;
pub mod geometry_mapper;
pub mod insight_source;
pub mod label_planner;
pub mod platform;
pub mod prepared_chart;
