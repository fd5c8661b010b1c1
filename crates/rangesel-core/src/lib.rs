//! Rangesel Core Library
//!
//! Platform-agnostic state and logic for an interactive range selection widget:
//! a horizontal strip mapping a reference range onto its pixel width, on which
//! the user creates, moves and resizes a selected sub-range.

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod listener;
pub mod mapper;
pub mod paint;
pub mod range;
pub mod selection;

pub use config::{ConfigError, SelectionConfig, HANDLE_HEIGHT, HANDLE_WIDTH};
pub use geometry::{handle_path, HandleSide, SelectionGeometry};
pub use gesture::{hit_test, Gesture, GestureMode, HitZone};
pub use input::{EventStatus, KeyEvent, MouseButton, PointerEvent, ESCAPE};
pub use listener::{ListenerId, Listeners, SelectionChanged, SelectionListener};
pub use mapper::{CoordinateMapper, MappingError};
pub use paint::{DrawCommand, Painter, RecordingPainter, SelectionStyle};
pub use range::{shared, Range, SharedRange};
pub use selection::SelectionComponent;
