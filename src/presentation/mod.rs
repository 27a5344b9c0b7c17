// Presentation layer - HTTP surface for prepared charts
pub mod app_state;
pub mod handlers;
