//! Hit-testing and the press/drag/release state machine.

use crate::mapper::CoordinateMapper;
use crate::range::Range;
use serde::{Deserialize, Serialize};

/// What the current pointer gesture is doing to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureMode {
    /// No button is held.
    #[default]
    None,
    /// Creating a new selection from the press point.
    Create,
    /// Translating the whole selection.
    Move,
    /// Dragging the lower bound.
    AdjustMin,
    /// Dragging the upper bound.
    AdjustMax,
}

/// Region of the widget under a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitZone {
    /// The band just left of the selection's start edge.
    MinHandle,
    /// The band just right of the selection's end edge.
    MaxHandle,
    /// Between the edges, inclusive.
    Body,
    /// Anywhere else, or any press while the selection is empty.
    Outside,
}

impl HitZone {
    /// The gesture a press in this zone starts.
    pub fn mode(self) -> GestureMode {
        match self {
            HitZone::MinHandle => GestureMode::AdjustMin,
            HitZone::MaxHandle => GestureMode::AdjustMax,
            HitZone::Body => GestureMode::Move,
            HitZone::Outside => GestureMode::Create,
        }
    }
}

/// Classify a press at pixel `x` against a selection drawn from `start` to `end`.
///
/// Handle bands are open intervals outside the edges and the body is closed, so a
/// press exactly on an edge lands in the body, and the handles of a zero-width
/// selection stay reachable from either side.
pub fn hit_test(x: f64, start: f64, end: f64, handle_width: f64) -> HitZone {
    if start - handle_width < x && x < start {
        HitZone::MinHandle
    } else if end < x && x < end + handle_width {
        HitZone::MaxHandle
    } else if start <= x && x <= end {
        HitZone::Body
    } else {
        HitZone::Outside
    }
}

/// State of one press → drag* → release sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gesture {
    mode: GestureMode,
    /// Pixel x at the start of the current drag step.
    anchor: f64,
}

impl Gesture {
    /// Create an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Pixel anchor of the current drag step.
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.mode != GestureMode::None
    }

    /// Begin a gesture at pixel `x` in `zone`.
    ///
    /// The mode is derived from the zone alone. A press outside the selection
    /// collapses it to the value under the pointer.
    pub fn press(&mut self, x: f64, zone: HitZone, selection: &mut Range, mapper: &CoordinateMapper) {
        self.mode = zone.mode();
        if self.mode == GestureMode::Create {
            let value = mapper.pixel_to_value(x);
            selection.set(value, value);
        }
        self.anchor = x;
        log::debug!("Gesture started: {:?} at x={}", self.mode, x);
    }

    /// Apply a drag to pixel `x`.
    pub fn drag(&mut self, x: f64, selection: &mut Range, mapper: &CoordinateMapper) {
        if self.mode == GestureMode::None {
            return;
        }
        if self.mode != GestureMode::Create && selection.is_empty() {
            // Selection was cleared under an active move or resize.
            log::trace!("Ignoring {:?} drag over an empty selection", self.mode);
            return;
        }

        let pressed = mapper.pixel_to_value(self.anchor);
        let current = mapper.pixel_to_value(x);

        match self.mode {
            GestureMode::AdjustMin => {
                if current > selection.max() {
                    let old_max = selection.max();
                    selection.set(old_max, current);
                    self.mode = GestureMode::AdjustMax;
                    log::debug!("Min handle crossed max at {}, now adjusting max", old_max);
                } else {
                    selection.set(current, selection.max());
                }
                self.anchor = x;
            }
            GestureMode::AdjustMax => {
                if current < selection.min() {
                    let old_min = selection.min();
                    selection.set(current, old_min);
                    self.mode = GestureMode::AdjustMin;
                    log::debug!("Max handle crossed min at {}, now adjusting min", old_min);
                } else {
                    selection.set(selection.min(), current);
                }
                self.anchor = x;
            }
            GestureMode::Move => {
                selection.shift(current - pressed);
                self.anchor = x;
            }
            GestureMode::Create => {
                // The anchor stays at the press point for the whole gesture.
                selection.set(pressed.min(current), pressed.max(current));
            }
            GestureMode::None => {}
        }

        log::trace!(
            "Drag to x={} ({:?}): selection [{}, {}]",
            x,
            self.mode,
            selection.min(),
            selection.max()
        );
    }

    /// End the gesture. Returns `true` if it should raise a change notification.
    ///
    /// Only a completed create notifies; moves and resizes do not.
    pub fn release(&mut self) -> bool {
        let notify = self.mode == GestureMode::Create;
        log::debug!("Gesture ended: {:?}", self.mode);
        self.mode = GestureMode::None;
        notify
    }
}
