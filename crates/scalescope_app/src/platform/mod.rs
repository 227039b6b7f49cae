//! Terminal platform: wires the pure core to stdin/stdout and the IO engine.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
