// Library interface for wikiseek (for testing purposes)
pub mod api;
pub mod app;
pub mod bindings;
pub mod config;

#[macro_use]
pub mod logging;

pub mod ui;
pub mod view;
