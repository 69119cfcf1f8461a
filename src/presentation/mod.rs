// Presentation layer - HTTP surface over the published view state
pub mod app_state;
pub mod handlers;
