// Chart data preparation for the Telemetry Viewer
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
