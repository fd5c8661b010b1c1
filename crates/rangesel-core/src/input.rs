//! Pointer and keyboard events consumed by the widget.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Key name recognized for clearing the selection.
pub const ESCAPE: &str = "Escape";

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in widget-local pixel coordinates.
///
/// Only the x coordinate matters to selection logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => *position,
        }
    }
}

/// Keyboard event carrying a logical key name such as `"Escape"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Whether the widget handled an event.
///
/// A consumed event should not propagate to other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Ignored,
    Consumed,
}

impl EventStatus {
    /// Check if the event was consumed.
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}
