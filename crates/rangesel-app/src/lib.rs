//! Rangesel Application
//!
//! A windowed host loop for the range selection widget: it owns the window
//! and GPU surface, translates window events into widget input and runs the
//! update-then-draw cycle every frame.

mod app;
mod config;

pub use app::App;
pub use config::{AppConfig, AppError};
