//! HTTP API handlers for instance-info

pub mod health;
pub mod json;
pub mod ui;

pub use health::health_routes;
pub use json::metadata_json;
pub use ui::serve_dashboard;
