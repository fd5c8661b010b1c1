//! The range selection component.

use crate::config::SelectionConfig;
use crate::geometry::{handle_path, HandleSide, SelectionGeometry};
use crate::gesture::{hit_test, Gesture, GestureMode, HitZone};
use crate::input::{EventStatus, KeyEvent, MouseButton, PointerEvent, ESCAPE};
use crate::listener::{ListenerId, Listeners, SelectionChanged, SelectionListener};
use crate::mapper::CoordinateMapper;
use crate::paint::{Painter, SelectionStyle};
use crate::range::SharedRange;
use kurbo::Size;

/// Interactive widget for creating, moving and resizing a selection range.
///
/// The component owns a rectangular pixel region whose full width represents
/// the reference range. Pointer and keyboard handlers mutate the shared
/// selection range directly; listeners are told when a gesture completes.
///
/// The host drives it from a single UI thread: [`update_state`] then [`draw`]
/// once per frame, and the event handlers as input arrives.
///
/// [`update_state`]: SelectionComponent::update_state
/// [`draw`]: SelectionComponent::draw
#[derive(Debug)]
pub struct SelectionComponent {
    /// The range being selected.
    selection: SharedRange,
    /// The reference range spanning the widget width.
    reference: SharedRange,
    config: SelectionConfig,
    /// Viewport size in pixels.
    size: Size,
    gesture: Gesture,
    /// Button that started the current gesture.
    held_button: Option<MouseButton>,
    /// Geometry projected by the last `update_state`.
    geometry: SelectionGeometry,
    listeners: Listeners,
}

impl SelectionComponent {
    /// Create a component over shared selection and reference ranges.
    pub fn new(selection: SharedRange, reference: SharedRange) -> Self {
        Self::with_config(selection, reference, SelectionConfig::default())
    }

    /// Create a component with custom handle dimensions.
    pub fn with_config(selection: SharedRange, reference: SharedRange, config: SelectionConfig) -> Self {
        Self {
            selection,
            reference,
            config,
            size: Size::ZERO,
            gesture: Gesture::new(),
            held_button: None,
            geometry: SelectionGeometry::EMPTY,
            listeners: Listeners::new(),
        }
    }

    /// Register a listener for selection changes.
    pub fn add_listener(&mut self, listener: impl SelectionListener + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Set the viewport size used for pixel math.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Current viewport size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Handle dimensions.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the handle dimensions, e.g. after a display scale change.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    /// Mode of the gesture in progress.
    pub fn mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// Geometry projected by the last [`update_state`](Self::update_state).
    pub fn geometry(&self) -> SelectionGeometry {
        self.geometry
    }

    /// Shared handle to the selection range.
    pub fn selection(&self) -> &SharedRange {
        &self.selection
    }

    /// Shared handle to the reference range.
    pub fn reference(&self) -> &SharedRange {
        &self.reference
    }

    /// Snapshot mapper for the current reference range and width.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(*self.reference.borrow(), self.size.width)
    }

    /// Recompute the per-frame geometry from the ranges.
    pub fn update_state(&mut self) {
        let mapper = self.mapper();
        self.geometry = SelectionGeometry::project(&self.selection.borrow(), &mapper);
    }

    /// Paint the selection as of the last [`update_state`](Self::update_state).
    ///
    /// Draws nothing for an empty selection. Handles are omitted while a new
    /// selection is being created.
    pub fn draw(&self, painter: &mut impl Painter, size: Size, style: &SelectionStyle) {
        if self.geometry.empty {
            return;
        }

        painter.fill_rect(self.geometry.body_rect(size), style.fill);
        painter.stroke_path(&self.geometry.border_path(size), style.border_width, style.border);

        if self.gesture.mode() != GestureMode::Create {
            let start = self.geometry.start_px(size.width);
            let end = self.geometry.end_px(size.width);
            painter.fill_path(&handle_path(start, size.height, HandleSide::Min, &self.config), style.handle);
            painter.fill_path(&handle_path(end, size.height, HandleSide::Max, &self.config), style.handle);
        }
    }

    /// Zone a press at pixel `x` would hit, using the current ranges.
    pub fn hit_test(&self, x: f64) -> HitZone {
        let selection = *self.selection.borrow();
        if selection.is_empty() {
            return HitZone::Outside;
        }
        let mapper = self.mapper();
        hit_test(
            x,
            mapper.value_to_pixel(selection.min()),
            mapper.value_to_pixel(selection.max()),
            self.config.handle_width,
        )
    }

    /// Start a gesture at pixel `x`.
    ///
    /// Ignored while the viewport has no usable width.
    pub fn pointer_pressed(&mut self, x: f64) -> EventStatus {
        let width = self.size.width;
        if !(width.is_finite() && width > 0.0) {
            log::warn!("Ignoring press on selection with unusable width {}", width);
            return EventStatus::Ignored;
        }

        let zone = self.hit_test(x);
        let mapper = self.mapper();
        let mut selection = self.selection.borrow_mut();
        self.gesture.press(x, zone, &mut selection, &mapper);
        EventStatus::Consumed
    }

    /// Continue the current gesture to pixel `x`.
    pub fn pointer_dragged(&mut self, x: f64) -> EventStatus {
        if !self.gesture.is_active() {
            return EventStatus::Ignored;
        }
        let mapper = self.mapper();
        let mut selection = self.selection.borrow_mut();
        self.gesture.drag(x, &mut selection, &mapper);
        EventStatus::Consumed
    }

    /// Finish the current gesture.
    ///
    /// A completed create notifies listeners before the mode returns to
    /// [`GestureMode::None`].
    pub fn pointer_released(&mut self) -> EventStatus {
        if !self.gesture.is_active() {
            return EventStatus::Ignored;
        }
        if self.gesture.mode() == GestureMode::Create {
            self.fire_selection_changed();
        }
        self.gesture.release();
        EventStatus::Consumed
    }

    /// Handle a key press by logical key name.
    ///
    /// Escape clears a non-empty selection, consumes the key and notifies.
    pub fn key_pressed(&mut self, key: &str) -> EventStatus {
        if key != ESCAPE {
            return EventStatus::Ignored;
        }

        let cleared = {
            let mut selection = self.selection.borrow_mut();
            if selection.is_empty() {
                false
            } else {
                selection.clear();
                true
            }
        };

        if !cleared {
            return EventStatus::Ignored;
        }
        log::debug!("Selection cleared");
        self.fire_selection_changed();
        EventStatus::Consumed
    }

    /// Dispatch a pointer event.
    ///
    /// Only the left button drives gestures, and a move is a drag only while it
    /// is held.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> EventStatus {
        let x = event.position().x;
        match *event {
            PointerEvent::Down { button, .. } => {
                if button != MouseButton::Left || self.held_button.is_some() {
                    return EventStatus::Ignored;
                }
                let status = self.pointer_pressed(x);
                if status.is_consumed() {
                    self.held_button = Some(button);
                }
                status
            }
            PointerEvent::Move { .. } => {
                if self.held_button.is_none() {
                    return EventStatus::Ignored;
                }
                self.pointer_dragged(x)
            }
            PointerEvent::Up { button, .. } => {
                if self.held_button != Some(button) {
                    return EventStatus::Ignored;
                }
                self.held_button = None;
                self.pointer_released()
            }
        }
    }

    /// Dispatch a keyboard event.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> EventStatus {
        match event {
            KeyEvent::Pressed(key) => self.key_pressed(key),
            KeyEvent::Released(_) => EventStatus::Ignored,
        }
    }

    fn fire_selection_changed(&mut self) {
        log::debug!("Selection changed, notifying {} listener(s)", self.listeners.len());
        self.listeners.notify(&SelectionChanged);
    }
}
