//! Terminal client for a calendar-event REST API.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod ui;
