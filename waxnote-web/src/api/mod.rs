//! HTTP API handlers for waxnote-web

pub mod health;
pub mod ui;

pub use health::health_routes;
pub use ui::ui_routes;
